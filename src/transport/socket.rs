//! Thin wrapper over a bound UDP socket.

use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::debug;

/// A bound UDP socket plus the configured buffer size, for diagnostic
/// purposes. Setting `SO_RCVBUF`/`SO_SNDBUF` beyond the OS default is a
/// best-effort request to the kernel; actual egress/ingress buffering is
/// reported here only as the value requested, not the value granted.
pub struct Socket {
    inner: UdpSocket,
    requested_buffer_size: usize,
}

impl Socket {
    /// Binds a UDP socket to `addr`.
    pub async fn bind(addr: SocketAddr, socket_buffer_size: usize) -> std::io::Result<Self> {
        let inner = UdpSocket::bind(addr).await?;
        debug!(
            %addr,
            requested_buffer_size = socket_buffer_size,
            "PFCP socket bound"
        );
        Ok(Socket {
            inner,
            requested_buffer_size: socket_buffer_size,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    pub fn requested_buffer_size(&self) -> usize {
        self.requested_buffer_size
    }

    pub async fn send_to(&self, buf: &[u8], addr: SocketAddr) -> std::io::Result<usize> {
        self.inner.send_to(buf, addr).await
    }

    pub async fn recv_from(&self, buf: &mut [u8]) -> std::io::Result<(usize, SocketAddr)> {
        self.inner.recv_from(buf).await
    }
}
