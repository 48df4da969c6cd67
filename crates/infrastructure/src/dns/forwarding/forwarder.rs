use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use super::upstream_addr::UpstreamAddr;
use crate::dns::transport::tcp::TcpTransport;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use answer_dns_application::ports::UpstreamDelegate;
use answer_dns_domain::{DomainError, RecordType, ResolvedRecord};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Asks upstream resolvers for the A records of a CNAME target, one server
/// at a time in list order.
pub struct UpstreamForwarder {
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Queries a single server. Truncated UDP replies are retried over TCP
    /// against the same address.
    pub async fn query_server(
        &self,
        server: &str,
        fqdn: &str,
    ) -> Result<Vec<ResolvedRecord>, DomainError> {
        let upstream: UpstreamAddr = server.parse()?;
        let server_addr = upstream.resolve(self.timeout).await?;

        let (id, request_bytes) = MessageBuilder::build_query_with_id(fqdn, RecordType::A)?;

        let mut response = self
            .exchange(&UdpTransport::new(server_addr), server_addr, fqdn, id, &request_bytes)
            .await?;

        if response.truncated {
            debug!(server = %server_addr, fqdn = %fqdn, "Truncated UDP response, retrying over TCP");
            response = self
                .exchange(&TcpTransport::new(server_addr), server_addr, fqdn, id, &request_bytes)
                .await?;
        }

        if !response.is_success() {
            return Err(DomainError::UpstreamRejected {
                server: server_addr.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            });
        }

        Ok(response.records)
    }

    /// Sends one query and accepts only a reply to it: matching ID, QR set
    /// and the queried name echoed back.
    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        server_addr: SocketAddr,
        fqdn: &str,
        id: u16,
        request_bytes: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let reply = transport.send(request_bytes, self.timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        let mismatch = if response.id != id {
            Some(format!("response ID {} does not match query ID {}", response.id, id))
        } else if !response.is_response {
            Some("reply is not marked as a response".to_string())
        } else if !response.echoes(fqdn) {
            Some(format!(
                "reply question {:?} does not match {}",
                response.question, fqdn
            ))
        } else {
            None
        };

        if let Some(reason) = mismatch {
            return Err(DomainError::TransportError {
                server: server_addr.to_string(),
                reason: format!("{} {}", reply.protocol_used, reason),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl UpstreamDelegate for UpstreamForwarder {
    async fn try_all(
        &self,
        fqdn: &str,
        servers: &[String],
    ) -> Result<Vec<ResolvedRecord>, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::NoUpstreamServers);
        }
        debug!(servers = servers.len(), fqdn = %fqdn, "Trying upstreams sequentially");

        for (index, server) in servers.iter().enumerate() {
            let start = Instant::now();
            match self.query_server(server, fqdn).await {
                Ok(records) => {
                    debug!(
                        server = %server,
                        fqdn = %fqdn,
                        answers = records.len(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        position = index,
                        "Upstream responded"
                    );
                    return Ok(records);
                }
                Err(e) => {
                    warn!(server = %server, fqdn = %fqdn, error = %e, position = index, "Upstream failed, trying next");
                }
            }
        }

        Err(DomainError::TransportAllServersUnreachable)
    }
}
