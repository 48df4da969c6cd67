//! TCP transport with the two-byte length prefix of RFC 1035 §4.2.2. Used for
//! upstream retries after truncation.

use super::{DnsTransport, TransportResponse};
use answer_dns_domain::DomainError;
use async_trait::async_trait;
use bytes::Bytes;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    fn with_server(&self, e: DomainError) -> DomainError {
        match e {
            DomainError::MalformedMessage(reason) => DomainError::TransportError {
                server: self.server_addr.to_string(),
                reason,
            },
            other => other,
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| DomainError::TransportError {
                server: self.server_addr.to_string(),
                reason: format!("connect: {}", e),
            })?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::TransportError {
                server: self.server_addr.to_string(),
                reason: format!("TCP_NODELAY: {}", e),
            })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.with_server(e))?;

        debug!(server = %self.server_addr, message_len = message_bytes.len(), "TCP query sent");

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.with_server(e))?;

        debug!(server = %self.server_addr, response_len = response_bytes.len(), "TCP response received");

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::MalformedMessage(format!(
            "Message too large for TCP framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream.write_all(&length.to_be_bytes()).await.map_err(|e| {
        DomainError::MalformedMessage(format!("Failed to write length prefix: {}", e))
    })?;
    stream.write_all(message_bytes).await.map_err(|e| {
        DomainError::MalformedMessage(format!("Failed to write DNS message: {}", e))
    })?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::MalformedMessage(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(|e| {
        DomainError::MalformedMessage(format!("Failed to read message length: {}", e))
    })?;

    let message_len = usize::from(u16::from_be_bytes(len_buf));
    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await.map_err(|e| {
        DomainError::MalformedMessage(format!("Failed to read message body: {}", e))
    })?;

    Ok(message)
}
