use crate::errors::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Reserved document key for the answers shared by every client.
pub const DEFAULT_KEY: &str = "default";

/// Identifies which tier of the answers store a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKey {
    Specific(IpAddr),
    Default,
}

impl ClientKey {
    /// Key for a querying client. IPv4-mapped IPv6 sources (dual-stack
    /// listeners) are folded back to their IPv4 form.
    pub fn from_ip(ip: IpAddr) -> Self {
        ClientKey::Specific(ip.to_canonical())
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ClientKey::Default)
    }
}

impl FromStr for ClientKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == DEFAULT_KEY {
            return Ok(ClientKey::Default);
        }
        s.parse::<IpAddr>()
            .map(ClientKey::from_ip)
            .map_err(|_| DomainError::ConfigParse(format!("invalid client key '{}'", s)))
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKey::Specific(ip) => write!(f, "{}", ip),
            ClientKey::Default => f.write_str(DEFAULT_KEY),
        }
    }
}
