use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswersFileConfig {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub reload_on_sighup: bool,
}

impl Default for AnswersFileConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            reload_on_sighup: true,
        }
    }
}

fn default_path() -> String {
    "answers.json".to_string()
}

fn default_true() -> bool {
    true
}
