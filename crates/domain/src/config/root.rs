use serde::{Deserialize, Serialize};

use super::answers_file::AnswersFileConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "answer-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/answer-dns/config.toml";

/// Main configuration structure for answer-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port, TCP)
    #[serde(default)]
    pub server: ServerConfig,

    /// Resolution settings (default TTL, upstream timeout)
    #[serde(default)]
    pub dns: DnsConfig,

    /// Location of the per-client answers document
    #[serde(default)]
    pub answers: AnswersFileConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. answer-dns.toml in current directory
    /// 3. /etc/answer-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(answers) = overrides.answers_path {
            self.answers.path = answers;
        }
        if let Some(ttl) = overrides.default_ttl {
            self.dns.default_ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Bind address cannot be empty".to_string(),
            ));
        }

        if self.dns.upstream_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.answers.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Answers file path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub answers_path: Option<String>,
    pub default_ttl: Option<u32>,
    pub log_level: Option<String>,
}
