use std::env;
use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "murmur";

pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    if let Some(rest) = p.strip_prefix("~\\") {
        // Windows-style
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Resolve a data file path: a non-empty `env_var` wins, otherwise
/// `<config dir>/murmur/<file_name>`.
pub fn config_file_path(env_var: &str, file_name: &str) -> PathBuf {
    if let Ok(path) = env::var(env_var)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(file_name)
}
