use jiratodo_core::api::{ConfigError, ScanError};
use thiserror::Error;

pub const EXIT_ERROR: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] ConfigError),

    #[error("scan failed")]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Other(anyhow::Error),
}

/// Core errors that travelled through `anyhow` keep their own variant.
impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ConfigError>() {
            Ok(e) => return CliError::Config(e),
            Err(err) => err,
        };
        match err.downcast::<ScanError>() {
            Ok(e) => CliError::Scan(e),
            Err(err) => CliError::Other(err),
        }
    }
}

impl CliError {
    /// Message with every `source()` in the chain, `: `-separated.
    pub fn chain_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(e) = source {
            msg.push_str(": ");
            msg.push_str(&e.to_string());
            source = e.source();
        }
        msg
    }
}
