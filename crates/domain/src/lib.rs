//! answer-dns domain layer
pub mod answers;
pub mod client_key;
pub mod cname_chain;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod fqdn;

pub use answers::{ARecordEntry, Answers, ClientAnswers, CnameRecordEntry};
pub use client_key::{ClientKey, DEFAULT_KEY};
pub use cname_chain::CnameChain;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordData, RecordType, ResolvedRecord};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use fqdn::normalize_fqdn;
