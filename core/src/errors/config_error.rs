// core/src/errors/config_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reference pattern invalid")]
    InvalidPattern(#[source] regex::Error),

    #[error("reference pattern is missing the named group `{0}`")]
    MissingGroup(&'static str),

    #[error("config file unreadable: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error")]
    Parse(#[source] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
