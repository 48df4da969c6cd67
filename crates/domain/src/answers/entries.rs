use crate::dns_record::ResolvedRecord;
use std::collections::HashMap;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecordEntry {
    pub ttl: Option<u32>,

    /// Never empty once loaded.
    pub addresses: Vec<Ipv4Addr>,
}

impl ARecordEntry {
    pub fn ttl_or(&self, default_ttl: u32) -> u32 {
        self.ttl.unwrap_or(default_ttl)
    }

    /// One A record per configured address, in configuration order.
    pub fn to_records(&self, fqdn: &str, default_ttl: u32) -> Vec<ResolvedRecord> {
        let ttl = self.ttl_or(default_ttl);
        self.addresses
            .iter()
            .map(|address| ResolvedRecord::a(fqdn, ttl, *address))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnameRecordEntry {
    pub ttl: Option<u32>,

    pub target: String,
}

impl CnameRecordEntry {
    pub fn ttl_or(&self, default_ttl: u32) -> u32 {
        self.ttl.unwrap_or(default_ttl)
    }

    pub fn to_record(&self, fqdn: &str, default_ttl: u32) -> ResolvedRecord {
        ResolvedRecord::cname(fqdn, self.ttl_or(default_ttl), self.target.clone())
    }
}

/// Answers configured for one tier. Names are normalized FQDNs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientAnswers {
    pub recurse: Vec<String>,

    pub a: HashMap<String, ARecordEntry>,

    pub cname: HashMap<String, CnameRecordEntry>,
}

impl ClientAnswers {
    pub fn a_entry(&self, fqdn: &str) -> Option<&ARecordEntry> {
        self.a.get(fqdn)
    }

    pub fn cname_entry(&self, fqdn: &str) -> Option<&CnameRecordEntry> {
        self.cname.get(fqdn)
    }

    pub fn record_count(&self) -> usize {
        self.a.len() + self.cname.len()
    }
}
