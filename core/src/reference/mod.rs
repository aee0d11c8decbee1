//! Ticket reference extraction.
//!
//! A reference pattern is a regular expression with three named groups:
//! `key`, `project` and `number`. Group positions are resolved once when the
//! pattern is compiled and then read for every match.

mod extractor;
mod filter;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use extractor::Extractor;
pub use filter::ProjectFilter;

/// TODO/FIXME marker followed by a `PROJECT-123` key.
pub const DEFAULT_PATTERN: &str =
    r"\b(?i:todo|fixme)\s*:?\s*(?<key>(?<project>[A-Z][_A-Z0-9]*)-(?<number>\d+))";

const GROUP_KEY: &str = "key";
const GROUP_PROJECT: &str = "project";
const GROUP_NUMBER: &str = "number";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub key: String,
    pub project: String,
    pub number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Reference {
    pub fn new(key: impl Into<String>, project: impl Into<String>, number: u64) -> Self {
        Self {
            key: key.into(),
            project: project.into(),
            number,
            file: None,
        }
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct ReferencePattern {
    re: Regex,
    key_idx: usize,
    project_idx: usize,
    number_idx: usize,
}

impl ReferencePattern {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let re = Regex::new(pattern).map_err(ConfigError::InvalidPattern)?;
        let key_idx = group_index(&re, GROUP_KEY)?;
        let project_idx = group_index(&re, GROUP_PROJECT)?;
        let number_idx = group_index(&re, GROUP_NUMBER)?;
        Ok(Self {
            re,
            key_idx,
            project_idx,
            number_idx,
        })
    }

    /// Compiles `pattern`, or [`DEFAULT_PATTERN`] when none is configured.
    pub fn from_config(pattern: Option<&str>) -> Result<Self, ConfigError> {
        Self::new(pattern.unwrap_or(DEFAULT_PATTERN))
    }

    /// Extracts references in match order. Matches that do not yield a
    /// valid reference are skipped.
    pub fn parse(&self, text: &str) -> Vec<Reference> {
        self.re
            .captures_iter(text)
            .filter_map(|caps| self.to_reference(&caps))
            .collect()
    }

    fn to_reference(&self, caps: &Captures<'_>) -> Option<Reference> {
        let key = caps.get(self.key_idx)?.as_str();
        let project = caps.get(self.project_idx)?.as_str();
        let number = caps.get(self.number_idx)?.as_str().parse::<u64>().ok()?;
        Some(Reference::new(key, project, number))
    }
}

fn group_index(re: &Regex, name: &'static str) -> Result<usize, ConfigError> {
    re.capture_names()
        .position(|n| n == Some(name))
        .ok_or(ConfigError::MissingGroup(name))
}

/// Extracts every reference `pattern` finds in `text`, left to right.
pub fn parse_string(text: &str, pattern: &ReferencePattern) -> Vec<Reference> {
    pattern.parse(text)
}
