pub mod config_error;
pub mod scan_error;
pub mod tracker_error;

pub use config_error::ConfigError;
pub use scan_error::ScanError;
pub use tracker_error::TrackerError;
