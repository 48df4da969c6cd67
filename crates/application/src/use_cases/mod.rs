pub mod answers;
pub mod dns;

pub use answers::{AnswersSummary, ReloadAnswersUseCase};
pub use dns::{AnswerResolver, HandleDnsQueryUseCase, MAX_CNAME_DEPTH};
