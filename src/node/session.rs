//! PFCP session state: the per-CP/UP-function-pair context identified by a
//! pair of Session Endpoint Identifiers.

use crate::error::EngineError;
use crate::node::RemoteNode;
use crate::types::Seid;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{RwLock, Weak};

/// A single PFCP session between the local node and one remote node.
///
/// Holds a [`Weak`] reference to its owning [`RemoteNode`] rather than an
/// [`std::sync::Arc`] so the session map and the session itself never form a
/// reference cycle; the session is reachable only through the remote node's
/// session map, which is the single owner.
#[derive(Debug)]
pub struct Session {
    local_seid: Seid,
    remote_seid: RwLock<Option<Seid>>,
    remote: Weak<RemoteNode>,
    outstanding: AtomicU32,
}

impl Session {
    pub(crate) fn new(local_seid: Seid, remote: Weak<RemoteNode>) -> Self {
        Session {
            local_seid,
            remote_seid: RwLock::new(None),
            remote,
            outstanding: AtomicU32::new(0),
        }
    }

    pub fn local_seid(&self) -> Seid {
        self.local_seid
    }

    pub fn remote_seid(&self) -> Option<Seid> {
        *self.remote_seid.read().expect("session remote_seid lock poisoned")
    }

    /// Records the peer-assigned SEID, learned from the F-SEID IE in a
    /// Session Establishment Request (received) or Response (sent), and
    /// indexes this session by it on the owning remote node so inbound
    /// session messages addressed to that SEID can be found.
    pub fn set_remote_seid(&self, seid: Seid) {
        *self.remote_seid.write().expect("session remote_seid lock poisoned") = Some(seid);
        if let Some(remote) = self.remote_node() {
            remote.index_remote_seid(self.local_seid, seid);
        }
    }

    /// The [`RemoteNode`] this session belongs to, if it still exists.
    pub fn remote_node(&self) -> Option<std::sync::Arc<RemoteNode>> {
        self.remote.upgrade()
    }

    /// Called by the transport layer when a request referencing this session
    /// is sent, so the session cannot be torn down while a reply is pending.
    pub(crate) fn mark_outstanding(&self) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    /// Called by the transport layer when a request referencing this session
    /// resolves (response received, or abandoned after retries).
    pub(crate) fn mark_resolved(&self) {
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }

    /// Reports whether this session has requests in flight.
    pub fn is_busy(&self) -> bool {
        self.outstanding.load(Ordering::Acquire) > 0
    }

    /// Removes this session from its remote node's session map.
    ///
    /// Fails with [`EngineError::SessionBusy`] while a request referencing
    /// the session is still outstanding; the caller should retry once the
    /// request resolves or times out.
    pub fn destroy(&self) -> Result<(), EngineError> {
        if self.is_busy() {
            return Err(EngineError::SessionBusy(self.local_seid));
        }
        if let Some(remote) = self.remote_node() {
            remote.remove_session(self.local_seid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LocalNode;
    use std::net::SocketAddr;

    fn remote_node() -> std::sync::Arc<RemoteNode> {
        let local = LocalNode::new(
            "127.0.0.1:8805".parse::<SocketAddr>().unwrap(),
            crate::config::PfcpConfig::default(),
        );
        local.create_remote_node("127.0.0.2:8805".parse().unwrap())
    }

    #[test]
    fn new_session_is_not_busy() {
        let remote = remote_node();
        let session = remote.create_session();
        assert!(!session.is_busy());
        assert!(session.remote_seid().is_none());
    }

    #[test]
    fn outstanding_request_blocks_destroy() {
        let remote = remote_node();
        let session = remote.create_session();
        session.mark_outstanding();
        assert!(matches!(
            session.destroy(),
            Err(EngineError::SessionBusy(_))
        ));
        session.mark_resolved();
        assert!(session.destroy().is_ok());
    }

    #[test]
    fn remote_seid_round_trips() {
        let remote = remote_node();
        let session = remote.create_session();
        session.set_remote_seid(Seid::new(0xAABB));
        assert_eq!(session.remote_seid(), Some(Seid::new(0xAABB)));
    }
}
