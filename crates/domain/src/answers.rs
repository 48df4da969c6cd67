mod document;
mod entries;
mod store;

pub use entries::{ARecordEntry, ClientAnswers, CnameRecordEntry};
pub use store::Answers;
