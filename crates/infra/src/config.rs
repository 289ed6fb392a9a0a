//! Configuration loading and representation.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_VAR: &str = "ZONEBOOK_CONFIG";
pub const CONTENT_ROOT_VAR: &str = "ZONEBOOK_CONTENT_ROOT";
pub const LOG_FILTER_VAR: &str = "ZONEBOOK_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for a catalog process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory against which relative backing-file paths resolve.
    pub content_root: PathBuf,
    /// `tracing` filter directive; `RUST_LOG` applies when unset.
    pub log_filter: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("."),
            log_filter: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the process environment.
    ///
    /// `ZONEBOOK_CONFIG` names an optional JSON file; `ZONEBOOK_CONTENT_ROOT`
    /// and `ZONEBOOK_LOG` then override individual fields.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match var(CONFIG_FILE_VAR) {
            Some(path) => Self::from_json_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(root) = var(CONTENT_ROOT_VAR) {
            config.content_root = PathBuf::from(root);
        }
        if let Some(filter) = var(LOG_FILTER_VAR) {
            config.log_filter = Some(filter);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = CatalogConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn environment_overrides_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"content_root": "/srv/hosts", "log_filter": "warn"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = CatalogConfig::from_vars(vars(&[
            (CONFIG_FILE_VAR, path.as_str()),
            (LOG_FILTER_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.content_root, PathBuf::from("/srv/hosts"));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = CatalogConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
