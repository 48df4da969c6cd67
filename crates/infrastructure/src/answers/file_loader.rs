use answer_dns_application::ports::AnswersSource;
use answer_dns_domain::{Answers, DomainError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads the answers document from disk. A missing file is an empty store,
/// not an error, so the server can start before the file is provisioned.
pub struct AnswersFileLoader {
    path: PathBuf,
}

impl AnswersFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AnswersSource for AnswersFileLoader {
    async fn load(&self) -> Result<Answers, DomainError> {
        let document = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Answers file not found, serving an empty store");
                None
            }
            Err(e) => {
                return Err(DomainError::ConfigRead {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        debug!(
            path = %self.path.display(),
            bytes = document.as_ref().map_or(0, String::len),
            "Read answers file"
        );

        Answers::load(document.as_deref())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
