mod answers_source;
mod answers_store;
mod upstream_delegate;

pub use answers_source::AnswersSource;
pub use answers_store::AnswersStore;
pub use upstream_delegate::UpstreamDelegate;
