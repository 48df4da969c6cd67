use crate::ports::{AnswersSource, AnswersStore};
use answer_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info};

/// Shape of a freshly installed answers generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswersSummary {
    pub clients: usize,
    pub records: usize,
}

pub struct ReloadAnswersUseCase {
    source: Arc<dyn AnswersSource>,
    store: Arc<dyn AnswersStore>,
}

impl ReloadAnswersUseCase {
    pub fn new(source: Arc<dyn AnswersSource>, store: Arc<dyn AnswersStore>) -> Self {
        Self { source, store }
    }

    /// Loads a new generation and swaps it in. On failure the generation
    /// already being served stays in place.
    pub async fn execute(&self) -> Result<AnswersSummary, DomainError> {
        let answers = self.source.load().await.map_err(|e| {
            error!(source = %self.source.describe(), error = %e, "Failed to load answers, keeping previous generation");
            e
        })?;

        let summary = AnswersSummary {
            clients: answers.client_count(),
            records: answers.record_count(),
        };

        self.store.replace(answers);

        info!(
            source = %self.source.describe(),
            clients = summary.clients,
            records = summary.records,
            "Answers loaded"
        );

        Ok(summary)
    }
}
