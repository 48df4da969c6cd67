mod builders;

pub use builders::AnswersDocumentBuilder;
