// core/src/errors/scan_error.rs
use thiserror::Error;

use super::tracker_error::TrackerError;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("status resolution failed")]
    Tracker(#[from] TrackerError),

    #[error("no status resolved for {key}")]
    Consistency { key: String },
}
