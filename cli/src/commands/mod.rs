pub mod check;
pub mod cli;
pub mod extract;

use jiratodo_core::api::AppConfig;

use crate::error::CliError;

/// Loads the config named on the command line, or the default lookup chain.
pub fn load_config(args: &cli::Args) -> Result<AppConfig, CliError> {
    let cfg = match &args.config {
        Some(path) => jiratodo_core::config::load_from(path)?,
        None => jiratodo_core::config::load_default()?,
    };
    Ok(cfg)
}

/// Replaces configured values with the ones given on the command line.
pub fn apply_overrides(cfg: &mut AppConfig, overrides: &cli::ScanOverrides) {
    if !overrides.project.is_empty() {
        cfg.projects = overrides.project.clone();
    }
    if let Some(regex) = &overrides.regex {
        cfg.regex = Some(regex.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_projects_and_regex() {
        let mut cfg = AppConfig {
            projects: vec!["OLD".into()],
            ..AppConfig::default()
        };
        let overrides = cli::ScanOverrides {
            project: vec!["PM".into(), "ABC".into()],
            regex: Some(r"<<(?<key>(?<project>[A-Z]+)-(?<number>\d+))>>".into()),
        };
        apply_overrides(&mut cfg, &overrides);
        assert_eq!(cfg.projects, vec!["PM".to_string(), "ABC".to_string()]);
        assert!(cfg.regex.is_some());
    }

    #[test]
    fn empty_overrides_keep_config() {
        let mut cfg = AppConfig {
            projects: vec!["KEEP".into()],
            regex: Some("x".into()),
            ..AppConfig::default()
        };
        apply_overrides(&mut cfg, &cli::ScanOverrides::default());
        assert_eq!(cfg.projects, vec!["KEEP".to_string()]);
        assert_eq!(cfg.regex.as_deref(), Some("x"));
    }
}
