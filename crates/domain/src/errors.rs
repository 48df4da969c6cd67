use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstream(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Failed to parse answers document: {0}")]
    ConfigParse(String),

    #[error("Failed to read answers file {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    #[error("No answer for {0}")]
    Unresolved(String),

    #[error("No upstream servers configured")]
    NoUpstreamServers,

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Upstream {server} answered {rcode}")]
    UpstreamRejected { server: String, rcode: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,
}

impl DomainError {
    /// Failures of the upstream delegate, which the resolver treats as "no answer".
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            DomainError::NoUpstreamServers
                | DomainError::TransportTimeout { .. }
                | DomainError::TransportError { .. }
                | DomainError::UpstreamRejected { .. }
                | DomainError::TransportAllServersUnreachable
        )
    }
}
