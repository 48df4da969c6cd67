#![allow(dead_code)]
use serde_json::{json, Map, Value};

/// Builds JSON answers documents tier by tier.
pub struct AnswersDocumentBuilder {
    tiers: Map<String, Value>,
}

impl AnswersDocumentBuilder {
    pub fn new() -> Self {
        Self { tiers: Map::new() }
    }

    fn tier(&mut self, client: &str) -> &mut Map<String, Value> {
        self.tiers
            .entry(client.to_string())
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .unwrap()
    }

    fn section(&mut self, client: &str, section: &str) -> &mut Map<String, Value> {
        self.tier(client)
            .entry(section.to_string())
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .unwrap()
    }

    pub fn recurse(mut self, client: &str, hosts: &[&str]) -> Self {
        self.tier(client).insert("recurse".to_string(), json!(hosts));
        self
    }

    pub fn a(mut self, client: &str, name: &str, addresses: &[&str], ttl: Option<u32>) -> Self {
        let mut entry = json!({ "answer": addresses });
        if let Some(ttl) = ttl {
            entry["ttl"] = json!(ttl);
        }
        self.section(client, "a").insert(name.to_string(), entry);
        self
    }

    pub fn cname(mut self, client: &str, name: &str, target: &str, ttl: Option<u32>) -> Self {
        let mut entry = json!({ "answer": target });
        if let Some(ttl) = ttl {
            entry["ttl"] = json!(ttl);
        }
        self.section(client, "cname").insert(name.to_string(), entry);
        self
    }

    pub fn build(self) -> String {
        Value::Object(self.tiers).to_string()
    }
}

impl Default for AnswersDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
