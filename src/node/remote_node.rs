//! State the local node keeps about one remote peer.

use crate::node::activity::ActivityWindow;
use crate::node::session::Session;
use crate::node::LocalNode;
use crate::stats::PeerStats;
use crate::transport::retransmit::{DuplicateEntry, OutstandingEntry};
use crate::types::Seid;
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, RwLock, Weak};
use tracing::{info, warn};

/// A remote PFCP peer (an SMF from the UPF's perspective, or vice versa).
#[derive(Debug)]
pub struct RemoteNode {
    addr: SocketAddr,
    local: Weak<LocalNode>,
    recovery_time_stamp: RwLock<Option<u32>>,
    activity: ActivityWindow,
    sessions: DashMap<Seid, Arc<Session>>,
    /// Secondary index of the same sessions, keyed by the peer's own SEID,
    /// for the inbound path: a session message from the remote carries the
    /// remote's SEID in its F-SEID (or, for the response the application
    /// sends back, as the lookup key for the session it just created).
    sessions_by_remote_seid: DashMap<Seid, Arc<Session>>,
    assigned_teid_range: RwLock<Option<u8>>,
    stats: PeerStats,
    failed: AtomicBool,
    next_sequence: AtomicU32,
    /// Requests sent to this peer, awaiting a response, keyed by sequence
    /// number.
    pub(crate) outstanding: DashMap<u32, Arc<OutstandingEntry>>,
    /// Responses this node sent to this peer, kept briefly so a
    /// retransmitted request gets the same bytes back instead of being
    /// reprocessed.
    pub(crate) dup_cache: DashMap<u32, DuplicateEntry>,
}

impl RemoteNode {
    pub(crate) fn new(addr: SocketAddr, local: Weak<LocalNode>, nbr_windows: u32, len_window_ms: u64) -> Self {
        RemoteNode {
            addr,
            local,
            recovery_time_stamp: RwLock::new(None),
            activity: ActivityWindow::new(nbr_windows, len_window_ms),
            sessions: DashMap::new(),
            sessions_by_remote_seid: DashMap::new(),
            assigned_teid_range: RwLock::new(None),
            stats: PeerStats::new(),
            failed: AtomicBool::new(false),
            next_sequence: AtomicU32::new(0),
            outstanding: DashMap::new(),
            dup_cache: DashMap::new(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn stats(&self) -> &PeerStats {
        &self.stats
    }

    pub fn activity(&self) -> &ActivityWindow {
        &self.activity
    }

    pub fn local_node(&self) -> Option<Arc<LocalNode>> {
        self.local.upgrade()
    }

    /// Allocates the next sequence number for a request sent to this peer.
    ///
    /// Sequence numbers are scoped per remote node (not global to the local
    /// node) so that one busy peer cannot exhaust the 24-bit space for
    /// every other peer.
    pub fn next_sequence(&self) -> u32 {
        let prev = self.next_sequence.fetch_add(1, Ordering::AcqRel);
        (prev + 1) & crate::types::SequenceNumber::MAX
    }

    pub fn recovery_time_stamp(&self) -> Option<u32> {
        *self.recovery_time_stamp.read().expect("recovery_time_stamp lock poisoned")
    }

    /// Records a newly observed recovery timestamp from this peer.
    ///
    /// Returns `true` if this is a strict increase over the previously
    /// observed value, meaning the peer restarted and every session with it
    /// is now stale. All such sessions are dropped from the session map
    /// before this method returns so the caller sees a clean slate.
    pub fn observe_recovery_timestamp(&self, ts: u32) -> bool {
        let mut guard = self
            .recovery_time_stamp
            .write()
            .expect("recovery_time_stamp lock poisoned");
        let restarted = match *guard {
            Some(prev) if ts > prev => true,
            None => false,
            _ => false,
        };
        *guard = Some(ts);
        drop(guard);

        if restarted {
            let stale: Vec<Seid> = self.sessions.iter().map(|e| *e.key()).collect();
            self.sessions.clear();
            self.sessions_by_remote_seid.clear();
            warn!(
                peer = %self.addr,
                dropped_sessions = stale.len(),
                "remote node restart detected, invalidated sessions"
            );
        }
        restarted
    }

    pub fn assigned_teid_range(&self) -> Option<u8> {
        *self.assigned_teid_range.read().expect("teid range lock poisoned")
    }

    pub(crate) fn set_assigned_teid_range(&self, range: u8) {
        *self.assigned_teid_range.write().expect("teid range lock poisoned") = Some(range);
    }

    /// Allocates a fresh [`Session`] bound to this remote node.
    pub fn create_session(self: &Arc<Self>) -> Arc<Session> {
        let local = self.local.upgrade().expect("local node dropped while in use");
        let local_seid = local.allocate_seid();
        let session = Arc::new(Session::new(local_seid, Arc::downgrade(self)));
        self.sessions.insert(local_seid, Arc::clone(&session));
        info!(peer = %self.addr, seid = %local_seid, "session created");
        session
    }

    pub fn session(&self, local_seid: Seid) -> Option<Arc<Session>> {
        self.sessions.get(&local_seid).map(|e| Arc::clone(e.value()))
    }

    /// Looks up a session by the peer's own SEID, the index inbound session
    /// messages resolve through once the peer starts addressing the session
    /// by the SEID it was handed in the establishment response.
    pub fn session_by_remote_seid(&self, remote_seid: Seid) -> Option<Arc<Session>> {
        self.sessions_by_remote_seid.get(&remote_seid).map(|e| Arc::clone(e.value()))
    }

    /// Records `remote_seid` against the session owning `local_seid` in the
    /// reverse index. Called by [`Session::set_remote_seid`] once the peer's
    /// SEID becomes known.
    pub(crate) fn index_remote_seid(&self, local_seid: Seid, remote_seid: Seid) {
        if let Some(session) = self.sessions.get(&local_seid).map(|e| Arc::clone(e.value())) {
            self.sessions_by_remote_seid.insert(remote_seid, session);
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Outstanding requests sent to this peer that have not yet been
    /// resolved by a response or abandoned after retries.
    pub fn outstanding_count(&self) -> usize {
        self.outstanding.len()
    }

    /// Whether a Heartbeat Request to this peer is currently in flight, so
    /// the heartbeat loop doesn't pile up a second one before the first
    /// resolves or times out.
    pub fn has_outstanding_heartbeat(&self) -> bool {
        self.outstanding
            .iter()
            .any(|e| e.value().msg_type == crate::message::MsgType::HeartbeatRequest)
    }

    /// Whether this peer is currently considered down (heartbeat retries
    /// exhausted without a reply). Cleared the next time any message from
    /// the peer is observed.
    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    pub(crate) fn mark_failed(&self) {
        self.failed.store(true, Ordering::Release);
    }

    pub(crate) fn mark_recovered(&self) {
        self.failed.store(false, Ordering::Release);
    }

    pub(crate) fn remove_session(&self, local_seid: Seid) {
        if let Some((_, session)) = self.sessions.remove(&local_seid) {
            if let Some(remote_seid) = session.remote_seid() {
                self.sessions_by_remote_seid.remove(&remote_seid);
            }
        }
    }
}
