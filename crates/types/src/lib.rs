use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The kind of content a search targets.
///
/// An unset search type is modelled as `Option<SearchType>::None` by callers;
/// the wire form of "unset" is the empty string.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Search message bodies.
    Messages,
    /// Search file attachments.
    Files,
}

impl SearchType {
    /// Lowercase identifier used in configuration and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::Files => "files",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ParseSearchTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "messages" => Ok(Self::Messages),
            "files" => Ok(Self::Files),
            other => Err(ParseSearchTypeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSearchTypeError(pub String);

impl fmt::Display for ParseSearchTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search type: {}", self.0)
    }
}

impl Error for ParseSearchTypeError {}

/// A localizable message: catalog identifier plus the text used when the
/// active catalog has no translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub id: String,
    pub default_message: String,
}

impl MessageDescriptor {
    pub fn new(id: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: default_message.into(),
        }
    }
}

/// A selectable search-hint suggestion.
///
/// Selecting the hint always yields `search_term`; `additional_display` only
/// changes what the row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    /// Literal text inserted into the query (e.g. `from:`).
    pub search_term: String,
    /// Localized description shown next to the term.
    pub message: MessageDescriptor,
    /// Alternate label rendered instead of `search_term`.
    #[serde(default)]
    pub additional_display: Option<String>,
}

impl SearchTerm {
    pub fn new(search_term: impl Into<String>, message: MessageDescriptor) -> Self {
        Self {
            search_term: search_term.into(),
            message,
            additional_display: None,
        }
    }

    pub fn with_additional_display(mut self, display: impl Into<String>) -> Self {
        self.additional_display = Some(display.into());
        self
    }

    /// Text rendered in the label column.
    pub fn label(&self) -> &str {
        self.additional_display
            .as_deref()
            .filter(|display| !display.is_empty())
            .unwrap_or(&self.search_term)
    }
}

/// Parameters of a previously issued search, as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecentSearchParams {
    /// Raw terms the user typed.
    pub terms: String,
    /// Whether the terms were combined with OR instead of AND.
    #[serde(default)]
    pub is_or_search: bool,
}

impl RecentSearchParams {
    pub fn new(terms: impl Into<String>) -> Self {
        Self {
            terms: terms.into(),
            is_or_search: false,
        }
    }
}

/// Messages delivered to components by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Animation tick.
    Tick,
    /// Terminal resized to the given columns and rows.
    Resize(u16, u16),
    /// The recent-search list changed on disk or in memory.
    RecentSearchesLoaded(Vec<RecentSearchParams>),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a search and remember it as a recent search.
    Search {
        params: RecentSearchParams,
        search_type: Option<SearchType>,
    },
    /// Leave the application.
    Quit,
}
