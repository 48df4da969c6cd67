#![allow(dead_code)]
use answer_dns_domain::{ARecordEntry, Answers, ClientAnswers, ClientKey, CnameRecordEntry};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

/// Builds an `Answers` snapshot tier by tier without going through JSON.
/// Names are stored exactly as given, so pass dot-terminated names.
#[derive(Default)]
pub struct AnswersBuilder {
    tiers: HashMap<ClientKey, ClientAnswers>,
}

fn key(client: &str) -> ClientKey {
    if client == "default" {
        ClientKey::Default
    } else {
        ClientKey::from_ip(client.parse::<IpAddr>().unwrap())
    }
}

impl AnswersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recurse(mut self, client: &str, hosts: &[&str]) -> Self {
        self.tiers.entry(key(client)).or_default().recurse =
            hosts.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn a(mut self, client: &str, name: &str, addresses: &[&str], ttl: Option<u32>) -> Self {
        let addresses = addresses
            .iter()
            .map(|a| a.parse::<Ipv4Addr>().unwrap())
            .collect();
        self.tiers
            .entry(key(client))
            .or_default()
            .a
            .insert(name.to_string(), ARecordEntry { ttl, addresses });
        self
    }

    pub fn cname(mut self, client: &str, name: &str, target: &str, ttl: Option<u32>) -> Self {
        self.tiers.entry(key(client)).or_default().cname.insert(
            name.to_string(),
            CnameRecordEntry {
                ttl,
                target: target.to_string(),
            },
        );
        self
    }

    pub fn build(self) -> Answers {
        let mut answers = Answers::empty();
        for (key, tier) in self.tiers {
            answers.insert(key, tier).unwrap();
        }
        answers
    }
}
