pub mod tcp;
pub mod udp;

use answer_dns_domain::DomainError;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
