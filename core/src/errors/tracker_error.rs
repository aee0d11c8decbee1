// core/src/errors/tracker_error.rs
use thiserror::Error;

/// Failure while fetching the status of a single ticket.
///
/// Any of these aborts the whole status resolution; there is no partial result.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker client could not be built: {0}")]
    Client(String),

    #[error("transport error while fetching {key}: {message}")]
    Transport { key: String, message: String },

    #[error("unexpected status {status} while fetching {key}")]
    HttpStatus {
        key: String,
        status: u16,
        body_snippet: String,
    },

    #[error("malformed response for {key}: {message}")]
    Decode { key: String, message: String },

    #[error("status id `{id}` of {key} is not an integer")]
    InvalidStatusId { key: String, id: String },
}

impl TrackerError {
    pub fn key(&self) -> Option<&str> {
        match self {
            TrackerError::Client(_) => None,
            TrackerError::Transport { key, .. }
            | TrackerError::HttpStatus { key, .. }
            | TrackerError::Decode { key, .. }
            | TrackerError::InvalidStatusId { key, .. } => Some(key),
        }
    }
}
