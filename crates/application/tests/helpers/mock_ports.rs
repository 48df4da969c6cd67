#![allow(dead_code)]

use answer_dns_application::ports::{AnswersSource, AnswersStore, UpstreamDelegate};
use answer_dns_domain::{Answers, DomainError, ResolvedRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Upstream delegate with canned answers per name that records every call.
#[derive(Clone, Default)]
pub struct MockUpstreamDelegate {
    responses: Arc<RwLock<HashMap<String, Vec<ResolvedRecord>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl MockUpstreamDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, fqdn: &str, records: Vec<ResolvedRecord>) {
        self.responses
            .write()
            .unwrap()
            .insert(fqdn.to_string(), records);
    }

    pub fn set_error(&self, fqdn: &str, error: DomainError) {
        self.errors.write().unwrap().insert(fqdn.to_string(), error);
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamDelegate for MockUpstreamDelegate {
    async fn try_all(
        &self,
        fqdn: &str,
        servers: &[String],
    ) -> Result<Vec<ResolvedRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((fqdn.to_string(), servers.to_vec()));

        if servers.is_empty() {
            return Err(DomainError::NoUpstreamServers);
        }

        if let Some(error) = self.errors.read().unwrap().get(fqdn) {
            return Err(error.clone());
        }

        self.responses
            .read()
            .unwrap()
            .get(fqdn)
            .cloned()
            .ok_or(DomainError::TransportAllServersUnreachable)
    }
}

pub struct MockAnswersStore {
    current: RwLock<Arc<Answers>>,
    replacements: Mutex<usize>,
}

impl MockAnswersStore {
    pub fn new(answers: Answers) -> Self {
        Self {
            current: RwLock::new(Arc::new(answers)),
            replacements: Mutex::new(0),
        }
    }

    pub fn replacements(&self) -> usize {
        *self.replacements.lock().unwrap()
    }
}

impl AnswersStore for MockAnswersStore {
    fn current(&self) -> Arc<Answers> {
        Arc::clone(&self.current.read().unwrap())
    }

    fn replace(&self, answers: Answers) {
        *self.current.write().unwrap() = Arc::new(answers);
        *self.replacements.lock().unwrap() += 1;
    }
}

/// Answers source returning queued results in order, then the last one forever.
pub struct MockAnswersSource {
    results: Mutex<Vec<Result<Answers, DomainError>>>,
}

impl MockAnswersSource {
    pub fn new(results: Vec<Result<Answers, DomainError>>) -> Self {
        Self {
            results: Mutex::new(results),
        }
    }
}

#[async_trait]
impl AnswersSource for MockAnswersSource {
    async fn load(&self) -> Result<Answers, DomainError> {
        let mut results = self.results.lock().unwrap();
        if results.len() > 1 {
            results.remove(0)
        } else {
            results
                .first()
                .cloned()
                .unwrap_or_else(|| Ok(Answers::empty()))
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
