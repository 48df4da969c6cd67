//! Serde shape of the JSON answers document.
//!
//! Member names are accepted lowercase or capitalized so documents written for
//! case-insensitive decoders keep loading. `null` members read as absent.

use serde::Deserialize;
use std::collections::HashMap;

pub(super) type AnswersDocument = HashMap<String, ClientDocument>;

#[derive(Debug, Default, Deserialize)]
pub(super) struct ClientDocument {
    #[serde(default, alias = "Recurse")]
    pub recurse: Option<Vec<String>>,

    #[serde(default, alias = "A")]
    pub a: Option<HashMap<String, ARecordDocument>>,

    #[serde(default, alias = "Cname", alias = "CNAME")]
    pub cname: Option<HashMap<String, CnameRecordDocument>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ARecordDocument {
    #[serde(default, alias = "Ttl", alias = "TTL")]
    pub ttl: Option<u32>,

    #[serde(default, alias = "Answer")]
    pub answer: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CnameRecordDocument {
    #[serde(default, alias = "Ttl", alias = "TTL")]
    pub ttl: Option<u32>,

    #[serde(default, alias = "Answer", alias = "target", alias = "Target")]
    pub answer: Option<String>,
}

pub(super) fn parse(document: &str) -> Result<AnswersDocument, serde_json::Error> {
    let parsed: Option<AnswersDocument> = serde_json::from_str(document)?;
    Ok(parsed.unwrap_or_default())
}
