use answer_dns_domain::{Answers, DomainError};
use async_trait::async_trait;

/// Produces a fresh answers generation, e.g. by reading the answers file.
#[async_trait]
pub trait AnswersSource: Send + Sync {
    async fn load(&self) -> Result<Answers, DomainError>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String;
}
