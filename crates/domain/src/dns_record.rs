use std::fmt;
use std::net::Ipv4Addr;

/// Query types the answer engine serves. Everything else is refused upstream
/// of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    CNAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Cname(String),
}

/// An answer-section record. The class is always IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResolvedRecord {
    pub fn a(name: impl Into<String>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::A(address),
        }
    }

    pub fn cname(name: impl Into<String>, ttl: u32, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::Cname(target.into()),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::Cname(_) => RecordType::CNAME,
        }
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(address) => Some(address),
            RecordData::Cname(_) => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match &self.data {
            RecordData::Cname(target) => Some(target),
            RecordData::A(_) => None,
        }
    }
}

impl fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            RecordData::A(address) => write!(f, "{} {} IN A {}", self.name, self.ttl, address),
            RecordData::Cname(target) => {
                write!(f, "{} {} IN CNAME {}", self.name, self.ttl, target)
            }
        }
    }
}
