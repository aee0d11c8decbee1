use std::sync::Arc;

use anyhow::Result;

use jiratodo_core::api::{AppConfig, FsSourceReader, Scanner, StatusTracker};

use crate::tracker::jira::JiraRestTracker;

pub fn build_tracker(cfg: &AppConfig) -> Result<Arc<dyn StatusTracker>> {
    cfg.validate()?;
    Ok(Arc::new(JiraRestTracker::new(&cfg.jira)?))
}

/// Scanner reading from disk and resolving against the configured Jira.
pub fn build_scanner(cfg: &AppConfig) -> Result<Scanner> {
    let tracker = build_tracker(cfg)?;
    Ok(Scanner::new(cfg, Arc::new(FsSourceReader), tracker)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tracker_requires_url() {
        let err = build_tracker(&AppConfig::default()).err().unwrap();
        assert!(err.to_string().contains("jira.url"));
    }

    #[test]
    fn build_scanner_rejects_bad_pattern() {
        let mut cfg = AppConfig::default();
        cfg.jira.url = "https://jira.example.com".into();
        cfg.regex = Some("(?<key>x)".into());
        assert!(build_scanner(&cfg).is_err());
    }

    #[test]
    fn build_scanner_with_valid_config() {
        let mut cfg = AppConfig::default();
        cfg.jira.url = "https://jira.example.com".into();
        let scanner = build_scanner(&cfg).unwrap();
        assert_eq!(scanner.parse_string("TODO ABC-1").len(), 1);
    }
}
