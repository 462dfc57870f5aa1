//! Collaborators of the Murmur search UI: client configuration, message
//! catalogs and recent-search formatting/persistence.

pub mod config;
pub mod i18n;
pub mod path_processing;
pub mod recent_searches;

pub use config::{ClientConfig, ConfigError, is_file_attachments_enabled};
pub use i18n::{CatalogError, Localizer, MessageCatalog};
pub use path_processing::expand_tilde;
pub use recent_searches::{
    InMemoryRecentSearchStore, JsonRecentSearchStore, RecentSearchError, RecentSearchStore, format_recent_search,
};
