//! The local PFCP node: owns address allocation (SEID, TEID range) and the
//! table of known remote peers.

use crate::config::PfcpConfig;
use crate::error::EngineError;
use crate::node::remote_node::RemoteNode;
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use tracing::info;

use crate::types::Seid;

/// This node's view of itself: its bind address, recovery timestamp, and the
/// allocators every session and remote node share.
#[derive(Debug)]
pub struct LocalNode {
    addr: SocketAddr,
    config: PfcpConfig,
    start_time: SystemTime,
    next_seid: AtomicU64,
    remotes: DashMap<SocketAddr, Arc<RemoteNode>>,
    teid_ranges: Option<Mutex<TeidRangeAllocator>>,
}

impl LocalNode {
    /// Creates a new local node bound to `addr`. `start_time` is fixed at
    /// construction and reported to peers as this node's Recovery Time
    /// Stamp; a peer sees it change only across a process restart.
    pub fn new(addr: SocketAddr, config: PfcpConfig) -> Arc<Self> {
        let teid_ranges = if config.assign_teid_range && config.teid_range_bits() > 0 {
            Some(Mutex::new(TeidRangeAllocator::new(config.teid_range_bits())))
        } else {
            None
        };
        Arc::new(LocalNode {
            addr,
            config,
            start_time: SystemTime::now(),
            next_seid: AtomicU64::new(1),
            remotes: DashMap::new(),
            teid_ranges,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn config(&self) -> &PfcpConfig {
        &self.config
    }

    pub fn start_time(&self) -> SystemTime {
        self.start_time
    }

    /// Allocates the next local SEID. SEID 0 is reserved by the protocol for
    /// messages sent before a session exists, so the allocator starts at 1.
    pub(crate) fn allocate_seid(&self) -> Seid {
        Seid::new(self.next_seid.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the existing [`RemoteNode`] for `addr`, creating one if this
    /// is the first time this node has been seen.
    pub fn create_remote_node(self: &Arc<Self>, addr: SocketAddr) -> Arc<RemoteNode> {
        self.create_remote_node_tracked(addr).0
    }

    /// Same as [`Self::create_remote_node`], but also reports whether this
    /// call created the entry, so a caller that needs to do one-time setup
    /// per peer (spawning a heartbeat task, firing `onRemoteNodeAdded`)
    /// doesn't race with a concurrent first-sight of the same peer.
    pub(crate) fn create_remote_node_tracked(self: &Arc<Self>, addr: SocketAddr) -> (Arc<RemoteNode>, bool) {
        match self.remotes.entry(addr) {
            dashmap::mapref::entry::Entry::Occupied(e) => (Arc::clone(e.get()), false),
            dashmap::mapref::entry::Entry::Vacant(e) => {
                info!(peer = %addr, "remote node registered");
                let node = Arc::new(RemoteNode::new(
                    addr,
                    Arc::downgrade(self),
                    self.config.nbr_activity_windows,
                    self.config.len_activity_window_ms,
                ));
                e.insert(Arc::clone(&node));
                (node, true)
            }
        }
    }

    pub fn remote_node(&self, addr: SocketAddr) -> Option<Arc<RemoteNode>> {
        self.remotes.get(&addr).map(|e| Arc::clone(e.value()))
    }

    pub fn remove_remote_node(&self, addr: SocketAddr) -> Option<Arc<RemoteNode>> {
        self.remotes.remove(&addr).map(|(_, v)| v)
    }

    pub fn remote_node_count(&self) -> usize {
        self.remotes.len()
    }

    /// Snapshot of every currently known remote node.
    pub fn remote_nodes(&self) -> Vec<Arc<RemoteNode>> {
        self.remotes.iter().map(|e| Arc::clone(e.value())).collect()
    }

    /// Assigns a fresh TEID range to a peer, if range assignment is enabled.
    pub fn allocate_teid_range(&self) -> Result<u8, EngineError> {
        match &self.teid_ranges {
            Some(allocator) => allocator
                .lock()
                .expect("teid range allocator lock poisoned")
                .allocate(),
            None => Err(EngineError::TeidRangeExhausted),
        }
    }

    pub fn release_teid_range(&self, range: u8) {
        if let Some(allocator) = &self.teid_ranges {
            allocator
                .lock()
                .expect("teid range allocator lock poisoned")
                .release(range);
        }
    }
}

/// First-fit free list over the `2^bits` TEID range values a local node can
/// hand out to UPFs when `assignTeidRange` is enabled.
///
/// `bits` must already be within [`PfcpConfig::teid_range_bits`]'s clamped
/// range (0..=7); this type trusts its caller rather than re-clamping.
#[derive(Debug)]
struct TeidRangeAllocator {
    free: Vec<bool>,
}

impl TeidRangeAllocator {
    fn new(bits: u8) -> Self {
        debug_assert!(bits <= PfcpConfig::MAX_TEID_RANGE_BITS);
        let capacity = 1usize << bits;
        TeidRangeAllocator {
            free: vec![true; capacity],
        }
    }

    fn allocate(&mut self) -> Result<u8, EngineError> {
        match self.free.iter().position(|&f| f) {
            Some(idx) => {
                self.free[idx] = false;
                Ok(idx as u8)
            }
            None => Err(EngineError::TeidRangeExhausted),
        }
    }

    fn release(&mut self, range: u8) {
        if let Some(slot) = self.free.get_mut(range as usize) {
            *slot = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_with_ranges(bits: u8) -> Arc<LocalNode> {
        let mut cfg = PfcpConfig::default();
        cfg.assign_teid_range = true;
        cfg.nbr_teid_range_bits = bits;
        LocalNode::new("127.0.0.1:8805".parse().unwrap(), cfg)
    }

    #[test]
    fn seid_allocation_starts_at_one_and_increments() {
        let local = LocalNode::new("127.0.0.1:8805".parse().unwrap(), PfcpConfig::default());
        assert_eq!(local.allocate_seid(), Seid::new(1));
        assert_eq!(local.allocate_seid(), Seid::new(2));
    }

    #[test]
    fn remote_node_lookup_is_idempotent() {
        let local = LocalNode::new("127.0.0.1:8805".parse().unwrap(), PfcpConfig::default());
        let addr = "127.0.0.2:8805".parse().unwrap();
        let a = local.create_remote_node(addr);
        let b = local.create_remote_node(addr);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(local.remote_node_count(), 1);
    }

    #[test]
    fn teid_range_allocation_is_disabled_by_default() {
        let local = LocalNode::new("127.0.0.1:8805".parse().unwrap(), PfcpConfig::default());
        assert!(matches!(
            local.allocate_teid_range(),
            Err(EngineError::TeidRangeExhausted)
        ));
    }

    #[test]
    fn teid_range_allocator_exhausts_and_releases() {
        let local = local_with_ranges(1); // 2 ranges
        let a = local.allocate_teid_range().unwrap();
        let b = local.allocate_teid_range().unwrap();
        assert_ne!(a, b);
        assert!(matches!(
            local.allocate_teid_range(),
            Err(EngineError::TeidRangeExhausted)
        ));
        local.release_teid_range(a);
        assert_eq!(local.allocate_teid_range().unwrap(), a);
    }
}
