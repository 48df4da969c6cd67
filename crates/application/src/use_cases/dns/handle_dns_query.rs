use super::resolve_answer::AnswerResolver;
use crate::ports::AnswersStore;
use answer_dns_domain::{ClientKey, CnameChain, DnsRequest, DomainError, ResolvedRecord};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub struct HandleDnsQueryUseCase {
    store: Arc<dyn AnswersStore>,
    resolver: Arc<AnswerResolver>,
}

impl HandleDnsQueryUseCase {
    pub fn new(store: Arc<dyn AnswersStore>, resolver: Arc<AnswerResolver>) -> Self {
        Self { store, resolver }
    }

    /// Resolves one query against the answers generation current at the time
    /// of the call. A reload mid-query does not affect the result.
    pub async fn execute(&self, request: &DnsRequest) -> Result<Vec<ResolvedRecord>, DomainError> {
        let start = Instant::now();
        let snapshot = self.store.current();
        let client = ClientKey::from_ip(request.client_ip);

        let resolved = self
            .resolver
            .resolve(&snapshot, client, &request.domain, CnameChain::new())
            .await;
        let response_time_us = start.elapsed().as_micros() as u64;

        match resolved {
            Some(records) if !records.is_empty() => {
                info!(
                    domain = %request.domain,
                    record_type = %request.record_type,
                    client = %client,
                    answers = records.len(),
                    response_time_us,
                    "Query answered"
                );
                Ok(records)
            }
            _ => {
                info!(
                    domain = %request.domain,
                    record_type = %request.record_type,
                    client = %client,
                    response_time_us,
                    "Query unresolved"
                );
                Err(DomainError::Unresolved(request.domain.to_string()))
            }
        }
    }
}
