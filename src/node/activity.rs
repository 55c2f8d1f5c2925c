//! Peer activity tracking used to decide when a heartbeat is due.
//!
//! A remote node's traffic is bucketed into a ring of fixed-length windows.
//! Any message received from the peer marks the current window active;
//! `needs_heartbeat` asks whether any window in the ring has seen activity
//! recently enough that a heartbeat isn't needed yet.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// A fixed-size ring of activity timestamps.
#[derive(Debug)]
pub struct ActivityWindow {
    slots: Vec<AtomicI64>,
    slot_len_ms: i64,
    cursor: AtomicUsize,
}

impl ActivityWindow {
    /// Creates a window with `nbr_windows` slots of `slot_len_ms` each.
    pub fn new(nbr_windows: u32, slot_len_ms: u64) -> Self {
        let nbr_windows = nbr_windows.max(1) as usize;
        let slots = (0..nbr_windows).map(|_| AtomicI64::new(0)).collect();
        ActivityWindow {
            slots,
            slot_len_ms: slot_len_ms.max(1) as i64,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Records activity from the peer at the current time.
    pub fn record_activity(&self) {
        let idx = self.cursor.load(Ordering::Relaxed) % self.slots.len();
        self.slots[idx].store(now_millis(), Ordering::Relaxed);
    }

    /// Advances the ring cursor. Called once per `slot_len_ms` tick by the
    /// owning node's heartbeat task so recorded activity eventually ages out.
    pub fn advance(&self) {
        self.cursor.fetch_add(1, Ordering::Relaxed);
    }

    /// Reports whether the peer has been silent for the whole window,
    /// meaning a heartbeat should be sent to probe it.
    pub fn needs_heartbeat(&self) -> bool {
        let now = now_millis();
        let span = self.slot_len_ms * self.slots.len() as i64;
        !self
            .slots
            .iter()
            .any(|slot| now - slot.load(Ordering::Relaxed) < span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn fresh_window_needs_a_heartbeat() {
        let window = ActivityWindow::new(3, 10);
        assert!(window.needs_heartbeat());
    }

    #[test]
    fn recorded_activity_suppresses_heartbeat() {
        let window = ActivityWindow::new(3, 1000);
        window.record_activity();
        assert!(!window.needs_heartbeat());
    }

    #[test]
    fn activity_ages_out_past_the_window_span() {
        let window = ActivityWindow::new(2, 5);
        window.record_activity();
        sleep(Duration::from_millis(20));
        assert!(window.needs_heartbeat());
    }
}
