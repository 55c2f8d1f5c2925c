//! UDP transport with T1/N1 retransmission and duplicate-response
//! suppression.

pub mod retransmit;
pub mod socket;

use crate::dispatch::{DispatchEvent, Dispatcher};
use crate::error::EngineError;
use crate::message::Message;
use crate::node::{LocalNode, RemoteNode};
use crate::translator;
use retransmit::{DuplicateEntry, OutstandingEntry};
use socket::Socket;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const MAX_DATAGRAM: usize = 65535;

/// Owns the UDP socket and the background tasks that read from it, retry
/// unacknowledged requests, and sweep the duplicate-response cache.
pub struct Transport {
    local: Arc<LocalNode>,
    socket: Arc<Socket>,
    dispatcher: Arc<Dispatcher>,
    cancel: CancellationToken,
}

impl Transport {
    /// Binds the local node's configured port and starts the receive and
    /// retry-scan background tasks. Events this transport decides the
    /// application should see are posted to `dispatcher`.
    pub async fn bind(local: Arc<LocalNode>, dispatcher: Arc<Dispatcher>) -> std::io::Result<Arc<Self>> {
        let cfg = local.config().clone();
        let socket = Arc::new(Socket::bind(local.addr(), cfg.socket_buffer_size).await?);
        let cancel = CancellationToken::new();

        let transport = Arc::new(Transport {
            local,
            socket,
            dispatcher,
            cancel,
        });

        transport.clone().spawn_receive_loop();
        transport.clone().spawn_retry_scan(cfg.t1_ms);
        transport.clone().spawn_dup_cache_sweep();

        Ok(transport)
    }

    pub fn local_node(&self) -> &Arc<LocalNode> {
        &self.local
    }

    /// The address the underlying socket is actually bound to. Differs from
    /// `local_node().addr()` when the node was configured with an ephemeral
    /// port (`:0`), as is common in tests.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Returns the [`RemoteNode`] for `addr`, creating it (and starting its
    /// heartbeat task, and notifying the application via
    /// [`DispatchEvent::RemoteNodeAdded`]) if this is the first time either
    /// direction has seen this peer. Applications call this before sending
    /// the first request to a peer they haven't heard from yet; the
    /// transport also calls it for every inbound datagram.
    pub fn get_or_create_remote(self: &Arc<Self>, addr: SocketAddr) -> Arc<RemoteNode> {
        let (remote, is_new) = self.local.create_remote_node_tracked(addr);
        if is_new {
            self.clone().spawn_heartbeat_loop(Arc::clone(&remote));
            self.dispatcher.post(DispatchEvent::RemoteNodeAdded(Arc::clone(&remote)));
        }
        remote
    }

    /// Drops the [`RemoteNode`] for `addr` from the local node's registry and
    /// notifies the application via [`DispatchEvent::RemoteNodeRemoved`]. Its
    /// heartbeat task notices on its next tick (it checks
    /// `LocalNode::remote_node` for exactly this) and exits without needing
    /// an explicit stop signal. No-op if the peer was never registered.
    pub fn remove_remote_node(&self, addr: SocketAddr) {
        if self.local.remove_remote_node(addr).is_some() {
            self.dispatcher.post(DispatchEvent::RemoteNodeRemoved(addr));
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stops the background tasks. Outstanding requests are not retried
    /// again after this returns; callers that want a clean drain should
    /// first wait for `remote.outstanding_count() == 0` for every peer.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Sends a request to `remote`, allocating its sequence number and
    /// tracking it for retransmission.
    pub async fn send_request(
        self: &Arc<Self>,
        remote: &Arc<RemoteNode>,
        mut msg: Box<dyn Message>,
        session: Option<Arc<crate::node::Session>>,
    ) -> Result<u32, EngineError> {
        let seq = remote.next_sequence();
        msg.set_sequence(seq);
        let msg_type = msg.msg_type();
        let bytes = translator::encode_req(msg.as_ref());

        let cfg = self.local.config();
        let entry = Arc::new(OutstandingEntry::new(
            bytes.clone(),
            msg_type,
            session,
            Duration::from_millis(cfg.t1_ms),
            cfg.n1,
        ));
        remote.outstanding.insert(seq, entry);

        if let Err(e) = self.socket.send_to(&bytes, remote.addr()).await {
            remote.outstanding.remove(&seq);
            remote.stats().record_request_sent_error();
            return Err(EngineError::Io(e));
        }
        remote.stats().record_request_sent();
        Ok(seq)
    }

    /// Sends a Heartbeat Request to `remote`, tracked like any other request.
    pub async fn send_heartbeat(self: &Arc<Self>, remote: &Arc<RemoteNode>) -> Result<u32, EngineError> {
        let seq = remote.next_sequence();
        let bytes = translator::encode_heartbeat_req(seq, self.local.start_time());
        let cfg = self.local.config();
        let entry = Arc::new(OutstandingEntry::new(
            bytes.clone(),
            crate::message::MsgType::HeartbeatRequest,
            None,
            Duration::from_millis(cfg.heartbeat_t1_ms),
            cfg.heartbeat_n1,
        ));
        remote.outstanding.insert(seq, entry);
        self.socket
            .send_to(&bytes, remote.addr())
            .await
            .map_err(EngineError::Io)?;
        remote.stats().record_heartbeat_sent();
        Ok(seq)
    }

    /// Sends a response to `remote`, caching it so a retransmitted request
    /// with the same sequence number gets the same bytes back.
    pub async fn send_response(&self, remote: &Arc<RemoteNode>, seq: u32, msg: &dyn Message) -> Result<(), EngineError> {
        let bytes = translator::encode_rsp(msg);
        remote.dup_cache.insert(seq, DuplicateEntry::new(bytes.clone()));
        self.socket
            .send_to(&bytes, remote.addr())
            .await
            .map_err(EngineError::Io)?;
        remote.stats().record_response_sent();
        Ok(())
    }

    /// Spawns the per-remote heartbeat task: on every `heartbeatT1` tick,
    /// sends a Heartbeat Request if the peer's activity window says it has
    /// been silent. Runs for the lifetime of the transport (or until the
    /// peer is removed, which simply leaves the task to find a dropped
    /// `Weak` and exit).
    fn spawn_heartbeat_loop(self: Arc<Self>, remote: Arc<RemoteNode>) {
        let cfg = self.local.config();
        let tick_ms = cfg.heartbeat_t1_ms.max(50);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
            loop {
                tokio::select! {
                    _ = self.cancel.cancelled() => return,
                    _ = interval.tick() => {
                        if self.local.remote_node(remote.addr()).is_none() {
                            return;
                        }
                        if !remote.has_outstanding_heartbeat() && remote.activity().needs_heartbeat() {
                            if let Err(e) = self.send_heartbeat(&remote).await {
                                warn!(peer = %remote.addr(), error = %e, "failed to send heartbeat");
                                self.dispatcher
                                    .post(DispatchEvent::SndReqError(Arc::clone(&remote), e));
                            }
                        }
                        remote.activity().advance();
                    }
                }
            }
        });
    }

    /// Spawns the duplicate-response-cache sweep task: periodically drops
    /// cached responses older than `T1 * N1` plus a safety margin, per
    /// spec.md's duplicate-cache eviction rule.
    fn spawn_dup_cache_sweep(self: Arc<Self>) {
        let cfg = self.local.config();
        let ttl = Duration::from_millis(cfg.t1_ms * (cfg.n1 as u64 + 1) * 2);
        let sweep_interval = ttl.max(Duration::from_millis(100));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(sweep_interval);
            loop {
                tokio::select! {
                    _ = self.cancel.cancelled() => return,
                    _ = interval.tick() => {
                        for remote in self.local.remote_nodes() {
                            remote.dup_cache.retain(|_, entry| !entry.is_expired(ttl));
                        }
                    }
                }
            }
        });
    }

    fn spawn_receive_loop(self: Arc<Self>) {
        tokio::spawn(async move {
            let mut buf = vec![0u8; MAX_DATAGRAM];
            loop {
                tokio::select! {
                    _ = self.cancel.cancelled() => {
                        debug!("receive loop stopping");
                        return;
                    }
                    result = self.socket.recv_from(&mut buf) => {
                        match result {
                            Ok((n, addr)) => self.clone().handle_datagram(&buf[..n], addr).await,
                            Err(e) => warn!(error = %e, "socket recv error"),
                        }
                    }
                }
            }
        });
    }

    async fn handle_datagram(self: Arc<Self>, buf: &[u8], addr: SocketAddr) {
        let info = match translator::get_msg_info(buf) {
            Ok(info) => info,
            Err(e) => {
                warn!(%addr, error = %e, "dropping undecodable datagram");
                return;
            }
        };

        if !translator::is_version_supported(info.version) {
            let rsp = translator::encode_version_not_supported_rsp(info.sequence);
            let _ = self.socket.send_to(&rsp, addr).await;
            return;
        }

        let remote = self.get_or_create_remote(addr);

        if let Some(ts) = translator::extract_recovery_timestamp(info.msg_type, buf) {
            if remote.observe_recovery_timestamp(ts) {
                self.dispatcher.post(DispatchEvent::RemoteNodeRestart(Arc::clone(&remote)));
            }
        }
        if remote.is_failed() {
            remote.mark_recovered();
        }

        if info.is_request {
            self.handle_request(buf, &remote, info).await;
        } else {
            self.handle_response(buf, &remote, info.sequence).await;
        }
    }

    async fn handle_request(&self, buf: &[u8], remote: &Arc<RemoteNode>, info: translator::MsgInfo) {
        let seq = info.sequence;
        if let Some(cached) = remote.dup_cache.get(&seq) {
            if let Err(e) = self.socket.send_to(&cached.bytes, remote.addr()).await {
                self.dispatcher
                    .post(DispatchEvent::SndRspError(Arc::clone(remote), EngineError::Io(e)));
            }
            return;
        }

        remote.stats().record_request_received();
        remote.activity().record_activity();

        match translator::decode_req(buf) {
            Ok(msg) => {
                if msg.msg_type() == crate::message::MsgType::HeartbeatRequest {
                    let rsp = translator::encode_heartbeat_rsp(seq, self.local.start_time());
                    remote.dup_cache.insert(seq, DuplicateEntry::new(rsp.clone()));
                    if let Err(e) = self.socket.send_to(&rsp, remote.addr()).await {
                        self.dispatcher
                            .post(DispatchEvent::SndRspError(Arc::clone(remote), EngineError::Io(e)));
                    }
                    return;
                }

                // SessionEstablishmentRequest is the one request type that
                // must allocate a Session *before* the application sees it:
                // the CP-assigned local SEID doesn't exist until this
                // allocation happens, and the peer's F-SEID needs to be
                // recorded against it so the application can look the
                // session back up by remote SEID when it replies.
                if info.is_create_session {
                    let session = remote.create_session();
                    match translator::extract_cp_fseid(buf) {
                        Some(fseid) => session.set_remote_seid(fseid.seid),
                        None => warn!(
                            peer = %remote.addr(),
                            "SessionEstablishmentRequest missing a decodable CP F-SEID"
                        ),
                    }
                }

                self.dispatcher.post(DispatchEvent::RcvdReq(Arc::clone(remote), msg));
            }
            Err(e) => {
                remote.stats().record_request_received_error();
                warn!(peer = %remote.addr(), error = %e, "failed to decode request");
            }
        }
    }

    async fn handle_response(&self, buf: &[u8], remote: &Arc<RemoteNode>, seq: u32) {
        let Some((_, entry)) = remote.outstanding.remove_if(&seq, |_, e| e.try_resolve()) else {
            remote.stats().record_response_received_error();
            return;
        };

        let req = match translator::decode_req(&entry.bytes) {
            Ok(req) => req,
            Err(e) => {
                warn!(peer = %remote.addr(), error = %e, "failed to re-decode outstanding request");
                return;
            }
        };

        match translator::decode_rsp(buf) {
            Ok(rsp) => {
                remote.stats().record_response_accepted();
                remote.activity().record_activity();
                self.dispatcher
                    .post(DispatchEvent::RcvdRsp(Arc::clone(remote), req, rsp));
            }
            Err(e) => {
                remote.stats().record_response_received_error();
                warn!(peer = %remote.addr(), error = %e, "failed to decode response");
            }
        }
    }

    fn spawn_retry_scan(self: Arc<Self>, tick_ms: u64) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_ms.max(50)));
            loop {
                tokio::select! {
                    _ = self.cancel.cancelled() => return,
                    _ = interval.tick() => self.scan_outstanding().await,
                }
            }
        });
    }

    async fn scan_outstanding(&self) {
        // `create_remote_node`/the session map only ever grow through
        // `handle_datagram`; iterate whatever remotes exist right now.
        let remotes: Vec<Arc<RemoteNode>> = self.remotes_snapshot();
        for remote in remotes {
            let expired: Vec<u32> = remote
                .outstanding
                .iter()
                .filter(|e| !e.is_resolved() && e.deadline_elapsed())
                .map(|e| *e.key())
                .collect();

            for seq in expired {
                let Some(entry) = remote.outstanding.get(&seq).map(|e| Arc::clone(e.value())) else {
                    continue;
                };
                if entry.take_retry() {
                    if let Err(e) = self.socket.send_to(&entry.bytes, remote.addr()).await {
                        self.dispatcher
                            .post(DispatchEvent::SndReqError(Arc::clone(&remote), EngineError::Io(e)));
                    }
                } else if entry.try_resolve() {
                    remote.outstanding.remove(&seq);
                    remote.stats().record_request_timeout();
                    if entry.msg_type == crate::message::MsgType::HeartbeatRequest {
                        remote.mark_failed();
                        remote.stats().record_heartbeat_failed();
                        self.dispatcher
                            .post(DispatchEvent::RemoteNodeFailure(Arc::clone(&remote)));
                    } else if let Ok(req) = translator::decode_req(&entry.bytes) {
                        self.dispatcher
                            .post(DispatchEvent::ReqTimeout(Arc::clone(&remote), req));
                    }
                }
            }
        }
    }

    fn remotes_snapshot(&self) -> Vec<Arc<RemoteNode>> {
        // `LocalNode` does not expose its internal map directly; node-level
        // iteration goes through the small accessor below.
        self.local.remote_nodes()
    }
}
