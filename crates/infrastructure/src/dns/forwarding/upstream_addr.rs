use answer_dns_domain::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// One entry of a recurse list: an IP literal or a hostname, with an optional
/// port that defaults to 53.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpstreamAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: String, port: u16 },
}

impl UpstreamAddr {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            UpstreamAddr::Resolved(addr) => Some(*addr),
            UpstreamAddr::Unresolved { .. } => None,
        }
    }

    /// Resolves hostnames through the system resolver; literals are returned
    /// as they are. The first address returned wins.
    pub async fn resolve(&self, timeout: Duration) -> Result<SocketAddr, DomainError> {
        let (hostname, port) = match self {
            UpstreamAddr::Resolved(addr) => return Ok(*addr),
            UpstreamAddr::Unresolved { hostname, port } => (hostname.as_str(), *port),
        };

        let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host((hostname, port)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.to_string(),
            })?
            .map_err(|e| DomainError::TransportError {
                server: self.to_string(),
                reason: format!("resolution failed: {}", e),
            })?;

        addrs.next().ok_or_else(|| DomainError::TransportError {
            server: self.to_string(),
            reason: "no addresses found".to_string(),
        })
    }
}

impl FromStr for UpstreamAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidUpstream("empty address".to_string()));
        }

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(UpstreamAddr::Resolved(addr));
        }

        let unbracketed = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);
        if let Ok(ip) = unbracketed.parse::<IpAddr>() {
            return Ok(UpstreamAddr::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }

        let (hostname, port) = match s.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| DomainError::InvalidUpstream(format!("bad port in '{}'", s)))?;
                (host, port)
            }
            None => (s, DEFAULT_DNS_PORT),
        };

        if hostname.is_empty() || hostname.contains(':') {
            return Err(DomainError::InvalidUpstream(s.to_string()));
        }

        Ok(UpstreamAddr::Unresolved {
            hostname: hostname.to_string(),
            port,
        })
    }
}

impl fmt::Display for UpstreamAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamAddr::Resolved(addr) => write!(f, "{}", addr),
            UpstreamAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}
