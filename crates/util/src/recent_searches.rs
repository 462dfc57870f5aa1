//! Recent-search formatting and persistence.
//!
//! Recent searches are stored most-recent-first in a bounded JSON file that
//! follows the same path conventions as the client config (env override,
//! config directory fallback, tilde expansion).

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use murmur_types::RecentSearchParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::{config_file_path, expand_tilde};

/// Environment variable controlling the recent-search file location.
pub const RECENT_SEARCHES_PATH_ENV: &str = "MURMUR_RECENT_SEARCHES_PATH";

/// Default filename for the persisted recent searches.
pub const RECENT_SEARCHES_FILE_NAME: &str = "recent_searches.json";

#[derive(Debug, Error)]
pub enum RecentSearchError {
    #[error("recent search I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("recent search serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render stored search parameters as the query text shown in the hint list
/// and placed back into the search box when the entry is picked.
///
/// Whitespace runs collapse to a single space outside quoted phrases. OR
/// searches join their tokens with ` OR ` so the text reproduces the search.
pub fn format_recent_search(params: &RecentSearchParams) -> String {
    let tokens = tokenize_terms(&params.terms);
    let separator = if params.is_or_search { " OR " } else { " " };
    tokens.join(separator)
}

fn tokenize_terms(terms: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for character in terms.trim().chars() {
        match character {
            '"' => {
                in_quotes = !in_quotes;
                current.push(character);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Stored recent search with its recording time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchRecord {
    #[serde(flatten)]
    pub params: RecentSearchParams,
    #[serde(with = "ts_seconds")]
    pub recorded_at: DateTime<Utc>,
}

#[derive(Default, Serialize, Deserialize)]
struct RecentSearchFile {
    entries: VecDeque<RecentSearchRecord>,
}

impl RecentSearchFile {
    fn record(&mut self, params: RecentSearchParams, limit: usize) {
        let formatted = format_recent_search(&params);
        if formatted.is_empty() {
            return;
        }
        self.entries.retain(|entry| format_recent_search(&entry.params) != formatted);
        self.entries.push_front(RecentSearchRecord {
            params,
            recorded_at: Utc::now(),
        });
        self.truncate(limit);
    }

    fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }

    fn params(&self) -> Vec<RecentSearchParams> {
        self.entries.iter().map(|entry| entry.params.clone()).collect()
    }
}

/// Shared trait implemented by recent-search backends.
pub trait RecentSearchStore: Send + Sync {
    /// Entries ordered from most recent to oldest.
    fn list(&self) -> Result<Vec<RecentSearchParams>, RecentSearchError>;

    /// Record a search. An entry formatting to the same text is moved to the
    /// front instead of duplicated; blank searches are ignored.
    fn record(&self, params: RecentSearchParams) -> Result<(), RecentSearchError>;
}

/// JSON-backed store persisted on disk.
pub struct JsonRecentSearchStore {
    path: PathBuf,
    entries: Mutex<RecentSearchFile>,
    max_entries: usize,
}

impl JsonRecentSearchStore {
    /// Create a store at the provided path (or the default path when omitted).
    pub fn new<P: Into<Option<PathBuf>>>(path: P, max_entries: usize) -> Result<Self, RecentSearchError> {
        let resolved_path = match path.into() {
            Some(path) => expand_tilde(&path.to_string_lossy()),
            None => default_recent_searches_path(),
        };

        let mut file = load_recent_search_file(&resolved_path)?;
        file.truncate(max_entries);
        Ok(Self {
            path: resolved_path,
            entries: Mutex::new(file),
            max_entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_locked(&self, file: &RecentSearchFile) -> Result<(), RecentSearchError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl RecentSearchStore for JsonRecentSearchStore {
    fn list(&self) -> Result<Vec<RecentSearchParams>, RecentSearchError> {
        let entries = self.entries.lock().expect("recent search lock poisoned");
        Ok(entries.params())
    }

    fn record(&self, params: RecentSearchParams) -> Result<(), RecentSearchError> {
        let mut entries = self.entries.lock().expect("recent search lock poisoned");
        entries.record(params, self.max_entries);
        self.save_locked(&entries)
    }
}

/// In-memory store used when persistence is unavailable and in tests.
pub struct InMemoryRecentSearchStore {
    entries: Mutex<RecentSearchFile>,
    max_entries: usize,
}

impl InMemoryRecentSearchStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(RecentSearchFile::default()),
            max_entries,
        }
    }
}

impl RecentSearchStore for InMemoryRecentSearchStore {
    fn list(&self) -> Result<Vec<RecentSearchParams>, RecentSearchError> {
        let entries = self.entries.lock().expect("recent search lock poisoned");
        Ok(entries.params())
    }

    fn record(&self, params: RecentSearchParams) -> Result<(), RecentSearchError> {
        let mut entries = self.entries.lock().expect("recent search lock poisoned");
        entries.record(params, self.max_entries);
        Ok(())
    }
}

pub fn default_recent_searches_path() -> PathBuf {
    config_file_path(RECENT_SEARCHES_PATH_ENV, RECENT_SEARCHES_FILE_NAME)
}

fn load_recent_search_file(path: &Path) -> Result<RecentSearchFile, RecentSearchError> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RecentSearchFile>(&content) {
            Ok(file) => Ok(file),
            Err(error) => {
                warn!("Failed to parse recent searches at {}: {}", path.display(), error);
                Ok(RecentSearchFile::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(RecentSearchFile::default()),
        Err(error) => Err(RecentSearchError::Io(error)),
    }
}
