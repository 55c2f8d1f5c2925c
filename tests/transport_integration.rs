//! End-to-end tests for the transport/node/dispatch layers over real UDP
//! sockets on loopback: retransmission, request timeout, duplicate-response
//! suppression, and peer restart detection, the way two live PFCP nodes
//! exercise them.

use once_cell::sync::OnceCell;
use pfcp_engine::config::PfcpConfig;
use pfcp_engine::dispatch::{Dispatcher, WorkGroup};
use pfcp_engine::error::EngineError;
use pfcp_engine::message::association_setup_request::AssociationSetupRequestBuilder;
use pfcp_engine::message::association_setup_response::AssociationSetupResponseBuilder;
use pfcp_engine::message::{Message, MsgType};
use pfcp_engine::node::{LocalNode, RemoteNode};
use pfcp_engine::transport::Transport;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::UdpSocket;

/// A [`WorkGroup`] that counts every callback it receives and, for
/// `AssociationSetupRequest`, replies through the transport it is bound to
/// (set once via [`RecordingApp::bind`]) so the duplicate-suppression and
/// restart-detection paths have a real response to observe.
#[derive(Default)]
struct RecordingApp {
    transport: OnceCell<Arc<Transport>>,
    rcvd_req: AtomicUsize,
    rcvd_rsp: AtomicUsize,
    timeouts: AtomicUsize,
    restarts: AtomicUsize,
    failures: AtomicUsize,
    added: AtomicUsize,
    last_rsp_seq: Mutex<Option<u32>>,
}

impl RecordingApp {
    fn bind(&self, transport: Arc<Transport>) {
        self.transport.set(transport).ok().expect("bound twice");
    }
}

impl WorkGroup for RecordingApp {
    fn on_rcvd_req(&self, remote: Arc<RemoteNode>, msg: Box<dyn Message>) {
        self.rcvd_req.fetch_add(1, Ordering::SeqCst);
        if msg.msg_type() == MsgType::AssociationSetupRequest {
            let transport = Arc::clone(self.transport.get().expect("transport bound"));
            let seq = msg.sequence();
            tokio::spawn(async move {
                let rsp = AssociationSetupResponseBuilder::new(seq)
                    .cause_accepted()
                    .node_id(Ipv4Addr::new(10, 0, 0, 2))
                    .recovery_time_stamp(std::time::SystemTime::now())
                    .build();
                let _ = transport.send_response(&remote, seq, &rsp).await;
            });
        }
    }

    fn on_rcvd_rsp(&self, _remote: Arc<RemoteNode>, _req: Box<dyn Message>, rsp: Box<dyn Message>) {
        *self.last_rsp_seq.lock().unwrap() = Some(rsp.sequence());
        self.rcvd_rsp.fetch_add(1, Ordering::SeqCst);
    }

    fn on_req_timeout(&self, _remote: Arc<RemoteNode>, _req: Box<dyn Message>) {
        self.timeouts.fetch_add(1, Ordering::SeqCst);
    }

    fn on_snd_req_error(&self, _remote: Arc<RemoteNode>, _err: EngineError) {}
    fn on_snd_rsp_error(&self, _remote: Arc<RemoteNode>, _err: EngineError) {}

    fn on_remote_node_added(&self, _remote: Arc<RemoteNode>) {
        self.added.fetch_add(1, Ordering::SeqCst);
    }
    fn on_remote_node_failure(&self, _remote: Arc<RemoteNode>) {
        self.failures.fetch_add(1, Ordering::SeqCst);
    }
    fn on_remote_node_restart(&self, _remote: Arc<RemoteNode>) {
        self.restarts.fetch_add(1, Ordering::SeqCst);
    }
    fn on_remote_node_removed(&self, _addr: SocketAddr) {}
}

/// Small T1/N1/heartbeat timers so the tests below run in well under a
/// second instead of waiting out the 3s/5s production defaults.
fn fast_config() -> PfcpConfig {
    PfcpConfig {
        pfcp_port: 0,
        t1_ms: 40,
        n1: 2,
        heartbeat_t1_ms: 40,
        heartbeat_n1: 1,
        nbr_activity_windows: 2,
        len_activity_window_ms: 20,
        ..PfcpConfig::default()
    }
}

async fn spawn_node(config: PfcpConfig) -> (Arc<Transport>, Arc<RecordingApp>) {
    let local = LocalNode::new("127.0.0.1:0".parse().unwrap(), config);
    let app = Arc::new(RecordingApp::default());
    let dispatcher = Dispatcher::spawn(2, app.clone());
    let transport = Transport::bind(local, Arc::new(dispatcher)).await.unwrap();
    app.bind(Arc::clone(&transport));
    (transport, app)
}

fn assn_setup_req(seq: u32) -> Box<dyn Message> {
    Box::new(
        AssociationSetupRequestBuilder::new(seq)
            .node_id(Ipv4Addr::new(10, 0, 0, 1))
            .recovery_time_stamp(std::time::SystemTime::now())
            .build(),
    )
}

async fn wait_until(mut predicate: impl FnMut() -> bool, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while !predicate() {
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    true
}

#[tokio::test]
async fn session_establishment_round_trip_delivers_response_to_sender() {
    let (cp, cp_app) = spawn_node(fast_config()).await;
    let (up, _up_app) = spawn_node(fast_config()).await;

    let up_addr = up.local_addr().unwrap();
    let remote = cp.get_or_create_remote(up_addr);

    cp.send_request(&remote, assn_setup_req(1), None).await.unwrap();

    assert!(
        wait_until(|| cp_app.rcvd_rsp.load(Ordering::SeqCst) == 1, Duration::from_secs(2)).await,
        "CP never observed the UP's response"
    );
    assert_eq!(*cp_app.last_rsp_seq.lock().unwrap(), Some(1));
    assert_eq!(cp_app.timeouts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn request_to_an_unresponsive_peer_times_out_after_n1_plus_one_sends() {
    let (cp, cp_app) = spawn_node(fast_config()).await;

    // A bound-but-silent socket: receives every retransmission but never
    // answers, exactly like the "Request timeout" scenario in the spec.
    let dead_peer = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead_peer.local_addr().unwrap();
    let remote = cp.get_or_create_remote(dead_addr);

    cp.send_request(&remote, assn_setup_req(7), None).await.unwrap();

    assert!(
        wait_until(|| cp_app.timeouts.load(Ordering::SeqCst) == 1, Duration::from_secs(2)).await,
        "request never timed out"
    );
    assert_eq!(cp_app.rcvd_rsp.load(Ordering::SeqCst), 0);

    // N1=2 retries plus the original send: 3 datagrams total reached the peer.
    let mut seen = 0;
    let mut buf = [0u8; 512];
    loop {
        match tokio::time::timeout(Duration::from_millis(50), dead_peer.recv_from(&mut buf)).await {
            Ok(Ok(_)) => seen += 1,
            _ => break,
        }
    }
    assert_eq!(seen, 3, "expected exactly N1+1 wire copies");
}

#[tokio::test]
async fn duplicate_request_is_answered_without_a_second_application_callback() {
    let (up, up_app) = spawn_node(fast_config()).await;
    let up_addr = up.local_addr().unwrap();

    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let bytes = assn_setup_req(42).marshal();

    client.send_to(&bytes, up_addr).await.unwrap();
    assert!(
        wait_until(|| up_app.rcvd_req.load(Ordering::SeqCst) == 1, Duration::from_secs(2)).await,
        "UP never observed the first request"
    );

    // Wait for the UP's response to land in its duplicate cache before
    // resending, mirroring a CP that retransmits after missing the reply.
    let mut first_rsp = [0u8; 512];
    let (n1, _) = tokio::time::timeout(Duration::from_secs(1), client.recv_from(&mut first_rsp))
        .await
        .unwrap()
        .unwrap();

    client.send_to(&bytes, up_addr).await.unwrap();
    let mut second_rsp = [0u8; 512];
    let (n2, _) = tokio::time::timeout(Duration::from_secs(1), client.recv_from(&mut second_rsp))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(&first_rsp[..n1], &second_rsp[..n2], "cached response bytes must match exactly");
    // Give any (incorrect) second dispatch a moment to land before asserting.
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(
        up_app.rcvd_req.load(Ordering::SeqCst),
        1,
        "a duplicate request must not invoke the handler twice"
    );
}

#[tokio::test]
async fn peer_restart_is_detected_from_a_strictly_increasing_recovery_timestamp() {
    let (up, up_app) = spawn_node(fast_config()).await;
    let up_addr = up.local_addr().unwrap();
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let first = AssociationSetupRequestBuilder::new(1)
        .node_id(Ipv4Addr::new(10, 0, 0, 1))
        .recovery_time_stamp(std::time::UNIX_EPOCH + Duration::from_secs(1_700_000_000))
        .build();
    client.send_to(&first.marshal(), up_addr).await.unwrap();
    assert!(wait_until(|| up_app.rcvd_req.load(Ordering::SeqCst) == 1, Duration::from_secs(2)).await);
    assert_eq!(up_app.restarts.load(Ordering::SeqCst), 0, "first sighting is not a restart");

    let second = AssociationSetupRequestBuilder::new(2)
        .node_id(Ipv4Addr::new(10, 0, 0, 1))
        .recovery_time_stamp(std::time::UNIX_EPOCH + Duration::from_secs(1_700_001_000))
        .build();
    client.send_to(&second.marshal(), up_addr).await.unwrap();

    assert!(
        wait_until(|| up_app.restarts.load(Ordering::SeqCst) == 1, Duration::from_secs(2)).await,
        "a strictly increasing recovery timestamp must fire onRemoteNodeRestart"
    );
}

#[tokio::test]
async fn first_sight_of_a_peer_fires_remote_node_added_exactly_once() {
    let (up, up_app) = spawn_node(fast_config()).await;
    let up_addr = up.local_addr().unwrap();
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    for seq in 1..=3u32 {
        let req = assn_setup_req(seq);
        client.send_to(&req.marshal(), up_addr).await.unwrap();
    }

    assert!(wait_until(|| up_app.rcvd_req.load(Ordering::SeqCst) == 3, Duration::from_secs(2)).await);
    assert_eq!(up_app.added.load(Ordering::SeqCst), 1, "onRemoteNodeAdded must fire exactly once per peer");
}
