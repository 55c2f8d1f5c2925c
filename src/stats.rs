//! Per-peer, per-message-class statistics.
//!
//! These counters are in-process only: no exporter, no aggregation across
//! peers. An embedding application that wants Prometheus-style metrics reads
//! a [`PeerStatsSnapshot`] per peer and feeds it into whatever exporter it
//! already uses.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters tracked for a single remote node.
#[derive(Debug, Default)]
pub struct PeerStats {
    requests_sent: AtomicU64,
    requests_sent_errors: AtomicU64,
    requests_received: AtomicU64,
    requests_received_errors: AtomicU64,
    responses_sent: AtomicU64,
    responses_sent_errors: AtomicU64,
    responses_received_accepted: AtomicU64,
    responses_received_rejected: AtomicU64,
    responses_received_errors: AtomicU64,
    request_timeouts: AtomicU64,
    heartbeats_sent: AtomicU64,
    heartbeats_failed: AtomicU64,
}

/// Plain snapshot of [`PeerStats`] at one point in time.
///
/// Fields are not read atomically as a group; a snapshot can show a response
/// counted before the matching request is, under concurrent access. Callers
/// that need a consistent total should sum snapshots, not rely on cross-field
/// invariants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeerStatsSnapshot {
    pub requests_sent: u64,
    pub requests_sent_errors: u64,
    pub requests_received: u64,
    pub requests_received_errors: u64,
    pub responses_sent: u64,
    pub responses_sent_errors: u64,
    pub responses_received_accepted: u64,
    pub responses_received_rejected: u64,
    pub responses_received_errors: u64,
    pub request_timeouts: u64,
    pub heartbeats_sent: u64,
    pub heartbeats_failed: u64,
}

macro_rules! counter_methods {
    ($($field:ident => $method:ident),+ $(,)?) => {
        $(
            pub fn $method(&self) {
                self.$field.fetch_add(1, Ordering::Relaxed);
            }
        )+
    };
}

impl PeerStats {
    pub fn new() -> Self {
        Self::default()
    }

    counter_methods! {
        requests_sent => record_request_sent,
        requests_sent_errors => record_request_sent_error,
        requests_received => record_request_received,
        requests_received_errors => record_request_received_error,
        responses_sent => record_response_sent,
        responses_sent_errors => record_response_sent_error,
        responses_received_accepted => record_response_accepted,
        responses_received_rejected => record_response_rejected,
        responses_received_errors => record_response_received_error,
        request_timeouts => record_request_timeout,
        heartbeats_sent => record_heartbeat_sent,
        heartbeats_failed => record_heartbeat_failed,
    }

    pub fn snapshot(&self) -> PeerStatsSnapshot {
        PeerStatsSnapshot {
            requests_sent: self.requests_sent.load(Ordering::Relaxed),
            requests_sent_errors: self.requests_sent_errors.load(Ordering::Relaxed),
            requests_received: self.requests_received.load(Ordering::Relaxed),
            requests_received_errors: self.requests_received_errors.load(Ordering::Relaxed),
            responses_sent: self.responses_sent.load(Ordering::Relaxed),
            responses_sent_errors: self.responses_sent_errors.load(Ordering::Relaxed),
            responses_received_accepted: self.responses_received_accepted.load(Ordering::Relaxed),
            responses_received_rejected: self.responses_received_rejected.load(Ordering::Relaxed),
            responses_received_errors: self.responses_received_errors.load(Ordering::Relaxed),
            request_timeouts: self.request_timeouts.load(Ordering::Relaxed),
            heartbeats_sent: self.heartbeats_sent.load(Ordering::Relaxed),
            heartbeats_failed: self.heartbeats_failed.load(Ordering::Relaxed),
        }
    }
}
