//! Ticket status model and the tracker seam.

mod resolver;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

pub use resolver::{distinct_keys, resolve_statuses};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: u32,
    pub name: String,
}

impl Status {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

pub type StatusMap = HashMap<String, Status>;

/// Source of live ticket status.
#[async_trait]
pub trait StatusTracker: Send + Sync {
    fn name(&self) -> &str;

    /// Fetches the current status of one ticket. One call is one remote request.
    async fn fetch_status(&self, key: &str) -> Result<Status, TrackerError>;
}
