//! Worker-pool dispatch of inbound messages and remote-node lifecycle events
//! to application code.
//!
//! This is the direct analogue of a PFCP node implementation's `WorkGroup`:
//! the transport and node layers never call application code directly, they
//! post a [`DispatchEvent`] here and a fixed pool of workers drains it,
//! routed so that every event for one session (or one remote node, for
//! node-level events) is handled by exactly one worker at a time.

use crate::error::EngineError;
use crate::message::Message;
use crate::node::RemoteNode;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, warn};

/// Application callbacks invoked by the dispatcher.
///
/// Every method takes owned data: unlike a node implementation written
/// against a manual memory model, there is no "the caller still owns this,
/// don't hold onto it" contract to honor. An implementation that wants to
/// keep the data past the call simply stores what it's given.
pub trait WorkGroup: Send + Sync {
    fn on_rcvd_req(&self, remote: Arc<RemoteNode>, msg: Box<dyn Message>);
    fn on_rcvd_rsp(&self, remote: Arc<RemoteNode>, req: Box<dyn Message>, rsp: Box<dyn Message>);
    fn on_req_timeout(&self, remote: Arc<RemoteNode>, req: Box<dyn Message>);
    fn on_snd_req_error(&self, remote: Arc<RemoteNode>, err: EngineError);
    fn on_snd_rsp_error(&self, remote: Arc<RemoteNode>, err: EngineError);
    fn on_remote_node_added(&self, remote: Arc<RemoteNode>);
    fn on_remote_node_failure(&self, remote: Arc<RemoteNode>);
    fn on_remote_node_restart(&self, remote: Arc<RemoteNode>);
    fn on_remote_node_removed(&self, addr: SocketAddr);
}

/// One unit of work posted by the transport/node layers for a worker to
/// hand to the application.
pub enum DispatchEvent {
    RcvdReq(Arc<RemoteNode>, Box<dyn Message>),
    RcvdRsp(Arc<RemoteNode>, Box<dyn Message>, Box<dyn Message>),
    ReqTimeout(Arc<RemoteNode>, Box<dyn Message>),
    SndReqError(Arc<RemoteNode>, EngineError),
    SndRspError(Arc<RemoteNode>, EngineError),
    RemoteNodeAdded(Arc<RemoteNode>),
    RemoteNodeFailure(Arc<RemoteNode>),
    RemoteNodeRestart(Arc<RemoteNode>),
    RemoteNodeRemoved(SocketAddr),
}

impl DispatchEvent {
    /// The key used to shard this event across the worker pool: a session's
    /// local SEID when the event concerns a specific session, otherwise the
    /// remote node's address so all of one peer's node-level events
    /// serialize on one worker.
    fn routing_key(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        match self {
            DispatchEvent::RcvdReq(remote, msg) | DispatchEvent::ReqTimeout(remote, msg) => {
                match msg.seid() {
                    Some(seid) => seid.hash(&mut hasher),
                    None => remote.addr().hash(&mut hasher),
                }
            }
            DispatchEvent::RcvdRsp(remote, req, _) => match req.seid() {
                Some(seid) => seid.hash(&mut hasher),
                None => remote.addr().hash(&mut hasher),
            },
            DispatchEvent::SndReqError(remote, _)
            | DispatchEvent::SndRspError(remote, _)
            | DispatchEvent::RemoteNodeAdded(remote)
            | DispatchEvent::RemoteNodeFailure(remote)
            | DispatchEvent::RemoteNodeRestart(remote) => remote.addr().hash(&mut hasher),
            DispatchEvent::RemoteNodeRemoved(addr) => addr.hash(&mut hasher),
        }
        hasher.finish()
    }

    fn invoke(self, app: &dyn WorkGroup) {
        match self {
            DispatchEvent::RcvdReq(remote, msg) => app.on_rcvd_req(remote, msg),
            DispatchEvent::RcvdRsp(remote, req, rsp) => app.on_rcvd_rsp(remote, req, rsp),
            DispatchEvent::ReqTimeout(remote, msg) => app.on_req_timeout(remote, msg),
            DispatchEvent::SndReqError(remote, err) => app.on_snd_req_error(remote, err),
            DispatchEvent::SndRspError(remote, err) => app.on_snd_rsp_error(remote, err),
            DispatchEvent::RemoteNodeAdded(remote) => app.on_remote_node_added(remote),
            DispatchEvent::RemoteNodeFailure(remote) => app.on_remote_node_failure(remote),
            DispatchEvent::RemoteNodeRestart(remote) => app.on_remote_node_restart(remote),
            DispatchEvent::RemoteNodeRemoved(addr) => app.on_remote_node_removed(addr),
        }
    }
}

/// A fixed pool of workers, each running its own queue of [`DispatchEvent`]s
/// against a shared [`WorkGroup`] implementation.
pub struct Dispatcher {
    senders: Vec<mpsc::UnboundedSender<DispatchEvent>>,
    handles: Vec<JoinHandle<()>>,
}

impl Dispatcher {
    /// Spawns `worker_count` worker tasks (at least 1) running `app`.
    pub fn spawn(worker_count: usize, app: Arc<dyn WorkGroup>) -> Self {
        let worker_count = worker_count.max(1);
        let mut senders = Vec::with_capacity(worker_count);
        let mut handles = Vec::with_capacity(worker_count);

        for worker_id in 0..worker_count {
            let (tx, mut rx) = mpsc::unbounded_channel::<DispatchEvent>();
            let app = Arc::clone(&app);
            let handle = tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    event.invoke(app.as_ref());
                }
                warn!(worker_id, "dispatch worker shut down");
            });
            senders.push(tx);
            handles.push(handle);
        }

        Dispatcher { senders, handles }
    }

    /// Posts an event, routing it to one worker by [`DispatchEvent::routing_key`].
    pub fn post(&self, event: DispatchEvent) {
        let idx = (event.routing_key() as usize) % self.senders.len();
        if self.senders[idx].send(event).is_err() {
            error!("dispatch worker {idx} is gone, dropping event");
        }
    }

    /// Waits for every worker to drain and exit. Call after dropping every
    /// sender side (i.e. after dropping the transport/node layers that post
    /// to this dispatcher).
    pub async fn join(self) {
        drop(self.senders);
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}
