mod reload;

pub use reload::{AnswersSummary, ReloadAnswersUseCase};
