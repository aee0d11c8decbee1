use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = "jiratodo.toml";

/// Loads `jiratodo.toml` from the working directory, falling back to the
/// user config directory and then to defaults. Env overrides are applied last.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = match default_config_path() {
        Some(path) => read_config(&path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
    Ok(cfg)
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let mut cfg = read_config(path)?;
    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
    Ok(cfg)
}

/// Overrides tracker settings from `JIRATODO_JIRA_*`; empty values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("JIRATODO_JIRA_URL") {
        cfg.jira.url = v;
    }
    if let Some(v) = non_empty("JIRATODO_JIRA_USERNAME") {
        cfg.jira.username = v;
    }
    if let Some(v) = non_empty("JIRATODO_JIRA_PASSWORD") {
        cfg.jira.password = v;
    }
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("jiratodo").join("config.toml");
    user.exists().then_some(user)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(ConfigError::Parse)
}
