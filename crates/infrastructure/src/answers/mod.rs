pub mod file_loader;
pub mod shared_store;

pub use file_loader::AnswersFileLoader;
pub use shared_store::SharedAnswers;
