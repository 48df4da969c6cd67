use answer_dns_domain::{DomainError, ResolvedRecord};
use async_trait::async_trait;

/// Recursive lookup against upstream resolvers.
#[async_trait]
pub trait UpstreamDelegate: Send + Sync {
    /// Tries each server in order and returns the answer section of the first
    /// one that responds successfully. Implementations bound every attempt
    /// with their own timeout.
    async fn try_all(
        &self,
        fqdn: &str,
        servers: &[String],
    ) -> Result<Vec<ResolvedRecord>, DomainError>;
}
