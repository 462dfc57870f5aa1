//! Client configuration for the Murmur search bar.
//!
//! A tiny JSON file carries the server-provided switches the search UI
//! depends on, such as whether file attachments (and therefore file search)
//! are enabled. The file lives in the standard configuration directory
//! (`~/.config/murmur/config.json` on most platforms) unless
//! `MURMUR_CONFIG_PATH` points elsewhere. A missing file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::config_file_path;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "MURMUR_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Number of recent searches kept when the config does not say otherwise.
pub const DEFAULT_MAX_RECENT_SEARCHES: usize = 20;

/// Error surfaced when reading the configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, permissions).
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persisted client configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server switch for file attachments; file search is offered only when set.
    pub enable_file_attachments: bool,
    /// Upper bound of the recent-search list.
    pub max_recent_searches: usize,
    /// Theme identifier used when no `MURMUR_THEME` override is present.
    pub preferred_theme: Option<String>,
    /// Catalog file for localized strings.
    pub message_catalog: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enable_file_attachments: true,
            max_recent_searches: DEFAULT_MAX_RECENT_SEARCHES,
            preferred_theme: None,
            message_catalog: None,
        }
    }
}

impl ClientConfig {
    /// Load from the default location (env override or config directory).
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&default_config_path())
    }

    /// Load from an explicit path. Missing files produce defaults and
    /// unparsable files are logged and replaced with defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => Ok(config),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse config file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(ConfigError::Io(error)),
        }
    }
}

/// Whether file attachments are enabled, which gates the "Files" search type.
pub fn is_file_attachments_enabled(config: &ClientConfig) -> bool {
    config.enable_file_attachments
}

pub fn default_config_path() -> PathBuf {
    config_file_path(CONFIG_PATH_ENV, CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(is_file_attachments_enabled(&config));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"enable_file_attachments": false}"#).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert!(!is_file_attachments_enabled(&config));
        assert_eq!(config.max_recent_searches, DEFAULT_MAX_RECENT_SEARCHES);
    }

    #[test]
    fn invalid_json_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(ClientConfig::load(&path).unwrap(), ClientConfig::default());
    }

    #[test]
    fn load_default_reads_env_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"max_recent_searches": 3, "preferred_theme": "ansi256"}"#).unwrap();

        temp_env::with_var(CONFIG_PATH_ENV, Some(path.as_os_str()), || {
            let config = ClientConfig::load_default().unwrap();
            assert_eq!(config.max_recent_searches, 3);
            assert_eq!(config.preferred_theme.as_deref(), Some("ansi256"));
        });
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/murmur-config.json"), || {
            assert_eq!(default_config_path(), PathBuf::from("/tmp/murmur-config.json"));
        });
    }
}
