//! UDP transport for upstream queries (RFC 1035 §4.2.1).
//!
//! Messages are sent as-is. A reply with the TC bit set means the caller
//! should retry the same server over TCP.

use super::{DnsTransport, TransportResponse};
use answer_dns_domain::DomainError;
use async_trait::async_trait;
use bytes::Bytes;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Largest reply accepted from an upstream over UDP.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn io_error(&self, stage: &str, e: std::io::Error) -> DomainError {
        DomainError::TransportError {
            server: self.server_addr.to_string(),
            reason: format!("{}: {}", stage, e),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.io_error("bind", e))?;

        // Connected sockets drop datagrams from any other peer.
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error("connect", e))?;

        let timed_out = || DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        };

        let bytes_sent = tokio::time::timeout(timeout, socket.send(message_bytes))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| self.io_error("send", e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| self.io_error("receive", e))?;

        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: Bytes::from(recv_buf),
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
