//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `jiratodo_core::api` instead of reaching into internal modules.

pub use crate::config::{AppConfig, JiraConfig, LoggingConfig};
pub use crate::errors::{ConfigError, ScanError, TrackerError};
pub use crate::io::{FsSourceReader, SourceReader};
pub use crate::reference::{
    parse_string, Extractor, ProjectFilter, Reference, ReferencePattern, DEFAULT_PATTERN,
};
pub use crate::report::{collect_problems, Problem};
pub use crate::scanner::Scanner;
pub use crate::status::{resolve_statuses, Status, StatusMap, StatusTracker};
