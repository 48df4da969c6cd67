use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL for configured records that do not carry their own.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Per-server timeout for upstream queries, in milliseconds.
    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            upstream_timeout_ms: default_upstream_timeout_ms(),
        }
    }
}

fn default_ttl() -> u32 {
    600
}

fn default_upstream_timeout_ms() -> u64 {
    2000
}
