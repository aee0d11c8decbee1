use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reference pattern with the named groups `key`, `project` and `number`.
    /// `None` selects [`crate::reference::DEFAULT_PATTERN`].
    #[serde(default)]
    pub regex: Option<String>,

    /// Project codes to keep. Empty keeps every project.
    #[serde(default)]
    pub projects: Vec<String>,

    #[serde(default = "default_allowed_statuses", alias = "allowedStatuses")]
    pub allowed_statuses: Vec<u32>,

    #[serde(default)]
    pub jira: JiraConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_allowed_statuses() -> Vec<u32> {
    // Jira's stock "Open" and "In Progress".
    vec![1, 3]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            regex: None,
            projects: Vec::new(),
            allowed_statuses: default_allowed_statuses(),
            jira: JiraConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Checks the settings a tracker-backed run needs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jira.url.trim().is_empty() {
            return Err(ConfigError::Validation("jira.url must not be empty".into()));
        }
        if !self.jira.url.starts_with("http://") && !self.jira.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "jira.url must be an http(s) URL, got `{}`",
                self.jira.url
            )));
        }
        if self.jira.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "jira.timeout_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}
