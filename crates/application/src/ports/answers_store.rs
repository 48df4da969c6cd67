use answer_dns_domain::Answers;
use std::sync::Arc;

/// Holder of the current answers generation.
///
/// Readers take one snapshot per query and never observe a partially
/// replaced store; `replace` swaps the whole generation at once.
pub trait AnswersStore: Send + Sync {
    fn current(&self) -> Arc<Answers>;

    fn replace(&self, answers: Answers);
}
