mod builders;
mod mock_ports;

pub use builders::AnswersBuilder;
pub use mock_ports::{MockAnswersSource, MockAnswersStore, MockUpstreamDelegate};
