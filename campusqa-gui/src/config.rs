use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "config.toml";

pub const DEFAULT_API_URL: &str = "https://api.campusqa.app";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_college_email_domains() -> Vec<String> {
    vec![
        "lpu.in".to_string(),
        "lpu.co.in".to_string(),
        "students.lpu.in".to_string(),
        "students.lpu.co.in".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Base URL of the portal backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Accepted domains for institutional email addresses.
    #[serde(default = "default_college_email_domains")]
    pub college_email_domains: Vec<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
}

impl std::default::Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            college_email_domains: default_college_email_domains(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file
            .write_all(content.as_bytes())
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        Ok(())
    }

    /// The backend base URL, overridable through the environment.
    pub fn api_url(&self) -> String {
        std::env::var("CAMPUSQA_API_URL").unwrap_or_else(|_| self.api_url.clone())
    }

    /// Whether the given address belongs to one of the accepted institutional
    /// domains. The local part must be non-empty and the domain must match
    /// exactly (case-insensitive).
    pub fn is_college_email(&self, email: &str) -> bool {
        let mut parts = email.trim().splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = match parts.next() {
            Some(d) => d,
            None => return false,
        };
        !local.is_empty()
            && !domain.contains('@')
            && self
                .college_email_domains
                .iter()
                .any(|d| d.eq_ignore_ascii_case(domain))
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidField(field, message) => {
                write!(f, "Invalid field '{}': {}", field, message)
            }
            Self::NotFound => write!(f, "Configuration file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.college_email_domains.is_empty());
        assert_eq!(config.log_level().ok(), Some(filter::LevelFilter::INFO));
    }

    #[test]
    fn config_rejects_unknown_log_level() {
        let config: Config = toml::from_str("log_level = 'warning'").unwrap();
        assert!(config.log_level().is_err());
    }

    #[test]
    fn college_email_domains() {
        let config = Config::default();
        assert!(config.is_college_email("jane.doe@lpu.in"));
        assert!(config.is_college_email("jane.doe@students.LPU.in"));
        assert!(!config.is_college_email("jane.doe@gmail.com"));
        assert!(!config.is_college_email("@lpu.in"));
        assert!(!config.is_college_email("jane.doe"));
        assert!(!config.is_college_email("jane@doe@lpu.in"));
    }
}
