pub mod answers_file;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use answers_file::AnswersFileConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
