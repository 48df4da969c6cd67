use super::document::{self, ARecordDocument, ClientDocument, CnameRecordDocument};
use super::entries::{ARecordEntry, ClientAnswers, CnameRecordEntry};
use crate::client_key::ClientKey;
use crate::errors::DomainError;
use crate::fqdn::normalize_fqdn;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

/// Immutable snapshot of the per-client answer configuration.
///
/// A generation is built once from a document and then only read; reloads
/// build a fresh `Answers` and swap it in wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    clients: HashMap<IpAddr, ClientAnswers>,
    default: Option<ClientAnswers>,
}

impl Answers {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a store from an optional document. A missing document is not an
    /// error and yields an empty store.
    pub fn load(document: Option<&str>) -> Result<Self, DomainError> {
        match document {
            Some(document) => Self::from_document(document),
            None => Ok(Self::empty()),
        }
    }

    /// Parses and validates a JSON answers document. A blank document is
    /// treated as an empty store.
    pub fn from_document(document: &str) -> Result<Self, DomainError> {
        if document.trim().is_empty() {
            return Ok(Self::empty());
        }

        let parsed =
            document::parse(document).map_err(|e| DomainError::ConfigParse(e.to_string()))?;

        let mut answers = Self::empty();
        for (key, client_document) in parsed {
            let client_key: ClientKey = key.parse()?;
            let client_answers = convert_client(&key, client_document)?;
            answers.insert(client_key, client_answers)?;
        }

        Ok(answers)
    }

    /// Adds a tier. Two document keys that name the same client (for example
    /// `10.0.0.1` and `::ffff:10.0.0.1`) are rejected.
    pub fn insert(&mut self, key: ClientKey, answers: ClientAnswers) -> Result<(), DomainError> {
        let slot_taken = match key {
            ClientKey::Default => self.default.replace(answers).is_some(),
            ClientKey::Specific(ip) => self.clients.insert(ip, answers).is_some(),
        };
        if slot_taken {
            return Err(DomainError::ConfigParse(format!(
                "client '{}' is defined more than once",
                key
            )));
        }
        Ok(())
    }

    /// Exact-match lookup; no subnet matching and no wildcards.
    pub fn lookup(&self, key: ClientKey) -> Option<&ClientAnswers> {
        match key {
            ClientKey::Default => self.default.as_ref(),
            ClientKey::Specific(ip) => self.clients.get(&ip),
        }
    }

    /// Upstream resolvers for a client: its own list first, then the default
    /// tier's. For the default key this is just the default list.
    pub fn recurse_hosts(&self, key: ClientKey) -> Vec<String> {
        let mut hosts = Vec::new();
        if !key.is_default() {
            if let Some(client) = self.lookup(key) {
                hosts.extend(client.recurse.iter().cloned());
            }
        }
        if let Some(default) = self.lookup(ClientKey::Default) {
            hosts.extend(default.recurse.iter().cloned());
        }
        hosts
    }

    /// Number of tiers, the default tier included.
    pub fn client_count(&self) -> usize {
        self.clients.len() + usize::from(self.default.is_some())
    }

    pub fn record_count(&self) -> usize {
        self.clients
            .values()
            .chain(self.default.iter())
            .map(ClientAnswers::record_count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.default.is_none()
    }
}

fn convert_client(key: &str, document: ClientDocument) -> Result<ClientAnswers, DomainError> {
    let mut answers = ClientAnswers::default();

    for host in document.recurse.unwrap_or_default() {
        let host = host.trim();
        if host.is_empty() {
            return Err(DomainError::ConfigParse(format!(
                "client '{}' has an empty recurse address",
                key
            )));
        }
        answers.recurse.push(host.to_string());
    }

    for (name, record) in document.a.unwrap_or_default() {
        let fqdn = normalize_fqdn(&name);
        let entry = convert_a(key, &fqdn, record)?;
        if answers.a.insert(fqdn.clone(), entry).is_some() {
            return Err(duplicate_name(key, "A", &fqdn));
        }
    }

    for (name, record) in document.cname.unwrap_or_default() {
        let fqdn = normalize_fqdn(&name);
        let entry = convert_cname(key, &fqdn, record)?;
        if answers.cname.insert(fqdn.clone(), entry).is_some() {
            return Err(duplicate_name(key, "CNAME", &fqdn));
        }
    }

    Ok(answers)
}

fn convert_a(key: &str, fqdn: &str, record: ARecordDocument) -> Result<ARecordEntry, DomainError> {
    let raw = record.answer.unwrap_or_default();
    if raw.is_empty() {
        return Err(DomainError::ConfigParse(format!(
            "client '{}': A record {} has no addresses",
            key, fqdn
        )));
    }

    let addresses = raw
        .iter()
        .map(|address| {
            address.trim().parse::<Ipv4Addr>().map_err(|_| {
                DomainError::ConfigParse(format!(
                    "client '{}': A record {} has invalid IPv4 address '{}'",
                    key, fqdn, address
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ARecordEntry {
        ttl: record.ttl,
        addresses,
    })
}

fn convert_cname(
    key: &str,
    fqdn: &str,
    record: CnameRecordDocument,
) -> Result<CnameRecordEntry, DomainError> {
    let target = record.answer.unwrap_or_default();
    if target.trim().is_empty() {
        return Err(DomainError::ConfigParse(format!(
            "client '{}': CNAME {} has no target",
            key, fqdn
        )));
    }

    Ok(CnameRecordEntry {
        ttl: record.ttl,
        target: normalize_fqdn(&target),
    })
}

fn duplicate_name(key: &str, kind: &str, fqdn: &str) -> DomainError {
    DomainError::ConfigParse(format!(
        "client '{}': {} {} is defined more than once",
        key, kind, fqdn
    ))
}
