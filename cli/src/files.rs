use std::collections::HashSet;

use anyhow::{bail, Context, Result};

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expands file globs into an ordered, de-duplicated list of files.
///
/// Plain paths are passed through untouched so that a missing file surfaces
/// as a read error for that path. A glob matching no file is an error.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            if seen.insert(pattern.clone()) {
                files.push(pattern.clone());
            }
            continue;
        }

        let mut matched = 0usize;
        let paths = glob::glob(pattern).with_context(|| format!("invalid glob `{pattern}`"))?;
        for entry in paths {
            let path = entry.with_context(|| format!("cannot read match of `{pattern}`"))?;
            if !path.is_file() {
                continue;
            }
            matched += 1;
            let path = path.to_string_lossy().to_string();
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
        if matched == 0 {
            bail!("pattern `{pattern}` matched no files");
        }
        tracing::debug!(pattern = %pattern, matched, "expanded glob");
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn expands_globs_and_dedupes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        fs::write(dir.path().join("b.js"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.js")).unwrap();

        let base = dir.path().to_string_lossy().to_string();
        let a = format!("{base}/a.js");
        let files = expand_patterns(&[a.clone(), format!("{base}/*.js")]).unwrap();

        assert_eq!(files, vec![a, format!("{base}/b.js")]);
    }

    #[test]
    fn plain_paths_pass_through() {
        let files = expand_patterns(&["does/not/exist.js".to_string()]).unwrap();
        assert_eq!(files, vec!["does/not/exist.js".to_string()]);
    }

    #[test]
    fn empty_glob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.rs", dir.path().to_string_lossy());
        let err = expand_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("matched no files"));
    }
}
