use std::sync::Arc;

use super::{ProjectFilter, Reference, ReferencePattern};
use crate::config::AppConfig;
use crate::errors::{ConfigError, ScanError};
use crate::io::SourceReader;

/// Reads files and extracts their project-filtered, file-tagged references.
#[derive(Clone)]
pub struct Extractor {
    pattern: ReferencePattern,
    filter: ProjectFilter,
    reader: Arc<dyn SourceReader>,
}

impl Extractor {
    pub fn new(pattern: ReferencePattern, filter: ProjectFilter, reader: Arc<dyn SourceReader>) -> Self {
        Self {
            pattern,
            filter,
            reader,
        }
    }

    pub fn from_config(cfg: &AppConfig, reader: Arc<dyn SourceReader>) -> Result<Self, ConfigError> {
        let pattern = ReferencePattern::from_config(cfg.regex.as_deref())?;
        let filter = ProjectFilter::new(cfg.projects.iter().cloned());
        Ok(Self::new(pattern, filter, reader))
    }

    /// References in `text`, unfiltered and without a file tag.
    pub fn parse_string(&self, text: &str) -> Vec<Reference> {
        self.pattern.parse(text)
    }

    /// References in the file at `path`, restricted to the configured
    /// projects and tagged with `path`.
    pub fn get_issues_for_file(&self, path: &str) -> Result<Vec<Reference>, ScanError> {
        let content = self.reader.read(path).map_err(|source| ScanError::Io {
            path: path.to_string(),
            source,
        })?;

        let issues: Vec<Reference> = self
            .filter
            .apply(self.parse_string(&content))
            .into_iter()
            .map(|r| r.in_file(path))
            .collect();

        tracing::debug!(file = path, references = issues.len(), "scanned file");
        Ok(issues)
    }

    /// References of every file, in file order. Stops at the first unreadable file.
    pub fn extract_files<S: AsRef<str>>(&self, paths: &[S]) -> Result<Vec<Reference>, ScanError> {
        let mut all = Vec::new();
        for path in paths {
            all.extend(self.get_issues_for_file(path.as_ref())?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;

    fn extractor(projects: &[&str]) -> Extractor {
        let reader = |path: &str| -> io::Result<String> {
            match path {
                "a.js" => Ok("// TODO PM-1\n// TODO ABC-2\n".to_string()),
                "b.js" => Ok("// TODO ABC-3 // TODO PM-1".to_string()),
                _ => Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            }
        };
        let cfg = AppConfig {
            projects: projects.iter().map(|s| s.to_string()).collect(),
            ..AppConfig::default()
        };
        Extractor::from_config(&cfg, Arc::new(reader)).unwrap()
    }

    #[test]
    fn extract_files_concatenates_in_file_order() {
        let refs = extractor(&[]).extract_files(&["a.js", "b.js"]).unwrap();
        let located: Vec<(String, String)> = refs
            .into_iter()
            .map(|r| (r.key, r.file.unwrap()))
            .collect();
        assert_eq!(
            located,
            vec![
                ("PM-1".to_string(), "a.js".to_string()),
                ("ABC-2".to_string(), "a.js".to_string()),
                ("ABC-3".to_string(), "b.js".to_string()),
                ("PM-1".to_string(), "b.js".to_string()),
            ]
        );
    }

    #[test]
    fn filter_applies_per_file() {
        let refs = extractor(&["PM"]).extract_files(&["a.js", "b.js"]).unwrap();
        assert_eq!(refs.len(), 2);
        assert!(refs.iter().all(|r| r.project == "PM"));
    }

    #[test]
    fn read_error_carries_path_and_source() {
        let err = extractor(&[]).extract_files(&["a.js", "secret.js"]).unwrap_err();
        match err {
            ScanError::Io { path, source } => {
                assert_eq!(path, "secret.js");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
