//! Orchestrates extraction, status resolution and the policy check.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{ConfigError, ScanError, TrackerError};
use crate::io::SourceReader;
use crate::reference::{Extractor, Reference};
use crate::report::{collect_problems, Problem};
use crate::status::{resolve_statuses, StatusMap, StatusTracker};

#[derive(Clone)]
pub struct Scanner {
    extractor: Extractor,
    allowed_statuses: HashSet<u32>,
    tracker: Arc<dyn StatusTracker>,
}

impl Scanner {
    /// Fails eagerly when the configured reference pattern is unusable.
    pub fn new(
        cfg: &AppConfig,
        reader: Arc<dyn SourceReader>,
        tracker: Arc<dyn StatusTracker>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            extractor: Extractor::from_config(cfg, reader)?,
            allowed_statuses: cfg.allowed_statuses.iter().copied().collect(),
            tracker,
        })
    }

    pub fn parse_string(&self, text: &str) -> Vec<Reference> {
        self.extractor.parse_string(text)
    }

    pub fn get_issues_for_file(&self, path: &str) -> Result<Vec<Reference>, ScanError> {
        self.extractor.get_issues_for_file(path)
    }

    pub async fn resolve_statuses<'a, I>(&self, keys: I) -> Result<StatusMap, TrackerError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        resolve_statuses(self.tracker.as_ref(), keys).await
    }

    /// Scans `paths`, resolves every referenced ticket and returns the
    /// references whose status is not allowed.
    pub async fn process_files<S: AsRef<str>>(&self, paths: &[S]) -> Result<Vec<Problem>, ScanError> {
        let references = self.extractor.extract_files(paths)?;
        let statuses = self
            .resolve_statuses(references.iter().map(|r| r.key.as_str()))
            .await?;
        let problems = collect_problems(&references, &statuses, &self.allowed_statuses)?;

        for p in &problems {
            tracing::warn!(
                key = %p.issue.key,
                file = p.issue.file.as_deref().unwrap_or("-"),
                status = %p.status.name,
                status_id = p.status.id,
                "ticket has a disallowed status"
            );
        }
        tracing::info!(
            files = paths.len(),
            references = references.len(),
            tickets = statuses.len(),
            problems = problems.len(),
            "ticket check finished"
        );
        Ok(problems)
    }
}
