//! Outstanding-request tracking and duplicate-response suppression.
//!
//! Both tables are owned by the [`crate::node::RemoteNode`] they concern so
//! that a slow or dead peer cannot affect bookkeeping for any other peer.

use crate::node::Session;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// A request this node sent and is waiting on a response for.
///
/// `resolved` gates the race between the retry-scan task (which fires
/// `onReqTimeout` when retries are exhausted) and the receive path (which
/// resolves the entry when a matching response arrives): whichever side
/// flips it from `false` to `true` first is the one that acts.
#[derive(Debug)]
pub struct OutstandingEntry {
    pub bytes: Vec<u8>,
    pub msg_type: crate::message::MsgType,
    pub session: Option<Arc<Session>>,
    deadline: Mutex<Instant>,
    retries_left: AtomicU32,
    t1: std::time::Duration,
    resolved: AtomicBool,
}

impl OutstandingEntry {
    pub fn new(bytes: Vec<u8>, msg_type: crate::message::MsgType, session: Option<Arc<Session>>, t1: std::time::Duration, n1: u32) -> Self {
        if let Some(session) = &session {
            session.mark_outstanding();
        }
        OutstandingEntry {
            bytes,
            msg_type,
            session,
            deadline: Mutex::new(Instant::now() + t1),
            retries_left: AtomicU32::new(n1),
            t1,
            resolved: AtomicBool::new(false),
        }
    }

    /// Attempts to claim this entry for resolution. Returns `true` exactly
    /// once across however many callers race to resolve it.
    pub fn try_resolve(&self) -> bool {
        self.resolved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.load(Ordering::Acquire)
    }

    pub fn deadline_elapsed(&self) -> bool {
        Instant::now() >= *self.deadline.lock().expect("outstanding entry deadline lock poisoned")
    }

    /// Consumes one retry if any remain, pushing the deadline out by `t1`
    /// again. Returns `true` if a retry was available.
    pub fn take_retry(&self) -> bool {
        let prev = self.retries_left.fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| {
            if v > 0 {
                Some(v - 1)
            } else {
                None
            }
        });
        if prev.is_ok() {
            *self.deadline.lock().expect("outstanding entry deadline lock poisoned") = Instant::now() + self.t1;
            true
        } else {
            false
        }
    }
}

impl Drop for OutstandingEntry {
    fn drop(&mut self) {
        if let Some(session) = &self.session {
            session.mark_resolved();
        }
    }
}

/// A response this node sent, kept around so a retransmitted request can be
/// answered with the exact same bytes instead of being re-processed by the
/// application.
#[derive(Debug, Clone)]
pub struct DuplicateEntry {
    pub bytes: Vec<u8>,
    pub inserted_at: Instant,
}

impl DuplicateEntry {
    pub fn new(bytes: Vec<u8>) -> Self {
        DuplicateEntry {
            bytes,
            inserted_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: std::time::Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }
}
