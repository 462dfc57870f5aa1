//! Message catalog used to localize UI strings.
//!
//! Components describe text with a [`MessageDescriptor`] (catalog id plus
//! default text) and resolve it through a [`Localizer`]. The bundled
//! implementation reads a JSON catalog of the form
//! `{"locale": "de", "messages": {"search_bar.usage.title": "Suchoptionen"}}`.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use murmur_types::MessageDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Locale reported by the built-in catalog.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Maps a message descriptor to locale-appropriate text.
pub trait Localizer: Send + Sync + std::fmt::Debug {
    fn localize(&self, descriptor: &MessageDescriptor) -> String;

    fn locale(&self) -> &str {
        DEFAULT_LOCALE
    }
}

/// Translations keyed by message id. Unknown ids fall back to the
/// descriptor's default text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub messages: IndexMap<String, String>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl MessageCatalog {
    /// Empty catalog: every lookup yields the default text.
    pub fn builtin() -> Self {
        Self {
            locale: default_locale(),
            messages: IndexMap::new(),
        }
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Read a catalog file. A missing file yields the built-in catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        match fs::read_to_string(path) {
            Ok(data) => {
                let catalog = Self::from_json(&data)?;
                debug!(locale = %catalog.locale, entries = catalog.messages.len(), "Loaded message catalog");
                Ok(catalog)
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Message catalog not found; using built-in strings");
                Ok(Self::builtin())
            }
            Err(error) => Err(CatalogError::Io(error)),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(id.into(), text.into());
    }
}

impl Localizer for MessageCatalog {
    fn localize(&self, descriptor: &MessageDescriptor) -> String {
        match self.messages.get(&descriptor.id) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => descriptor.default_message.clone(),
        }
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn title() -> MessageDescriptor {
        MessageDescriptor::new("search_bar.usage.title", "Search options")
    }

    #[test]
    fn unknown_ids_use_default_text() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.localize(&title()), "Search options");
        assert_eq!(catalog.locale(), "en");
    }

    #[test]
    fn translations_override_defaults() {
        let catalog = MessageCatalog::from_json(
            r#"{"locale":"de","messages":{"search_bar.usage.title":"Suchoptionen","search_bar.usage.recent_searches":""}}"#,
        )
        .unwrap();
        assert_eq!(catalog.localize(&title()), "Suchoptionen");
        assert_eq!(catalog.locale(), "de");

        let blank = MessageDescriptor::new("search_bar.usage.recent_searches", "Recent searches");
        assert_eq!(catalog.localize(&blank), "Recent searches");
    }

    #[test]
    fn missing_file_yields_builtin() {
        let dir = tempdir().unwrap();
        let catalog = MessageCatalog::load(&dir.path().join("none.json")).unwrap();
        assert_eq!(catalog, MessageCatalog::builtin());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{").unwrap();
        assert!(matches!(MessageCatalog::load(&path), Err(CatalogError::Serialization(_))));
    }
}
