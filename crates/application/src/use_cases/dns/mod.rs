mod handle_dns_query;
mod resolve_answer;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use resolve_answer::{AnswerResolver, MAX_CNAME_DEPTH};
