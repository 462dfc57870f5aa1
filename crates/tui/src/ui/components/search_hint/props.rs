//! Inputs and outputs of the search-hint panel.
//!
//! The panel is a function of [`HintProps`]; user interaction is reported
//! through a [`HintHandler`]. Every handler method except
//! [`HintHandler::on_option_selected`] defaults to a no-op, so implementors
//! only override what they care about.

use murmur_types::{RecentSearchParams, SearchTerm, SearchType};

/// Everything the panel needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct HintProps<'a> {
    /// Suggestion rows, in display order.
    pub options: &'a [SearchTerm],
    /// Previously issued searches shown below the suggestions.
    pub recent_searches: Option<&'a [RecentSearchParams]>,
    /// Highlighted position across buttons, or options followed by recents.
    pub highlighted_index: Option<usize>,
    /// Whether the last change to `highlighted_index` came from the keyboard.
    pub highlighted_via_key_press: bool,
    pub search_type: Option<SearchType>,
    pub with_title: bool,
    /// Whether the "Files" search type is offered (file attachments enabled).
    pub file_search_enabled: bool,
    /// Whether the parent handles search-type selection at all.
    pub type_selection_enabled: bool,
}

impl<'a> HintProps<'a> {
    pub fn new(options: &'a [SearchTerm]) -> Self {
        Self {
            options,
            recent_searches: None,
            highlighted_index: None,
            highlighted_via_key_press: false,
            search_type: None,
            with_title: false,
            file_search_enabled: true,
            type_selection_enabled: false,
        }
    }

    pub fn mode(&self) -> HintMode {
        HintMode::from_props(self)
    }
}

/// Which of the two panels is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMode {
    /// Ask what to search for before offering suggestions.
    TypeSelection { file_search: bool },
    /// Suggestion list, optionally followed by recent searches.
    Suggestions { search_type: Option<SearchType> },
}

impl HintMode {
    pub fn from_props(props: &HintProps<'_>) -> Self {
        if props.type_selection_enabled && props.search_type.is_none() {
            Self::TypeSelection {
                file_search: props.file_search_enabled,
            }
        } else {
            Self::Suggestions {
                search_type: props.search_type,
            }
        }
    }

    /// Buttons shown in type selection, in order.
    pub fn search_types(&self) -> &'static [SearchType] {
        match self {
            Self::TypeSelection { file_search: true } => &[SearchType::Messages, SearchType::Files],
            Self::TypeSelection { file_search: false } => &[SearchType::Messages],
            Self::Suggestions { .. } => &[],
        }
    }
}

/// Receives user interaction with the panel. Each method runs synchronously
/// from the input event that caused it, at most once per event.
pub trait HintHandler {
    /// A suggestion row was picked; carries its literal search term.
    fn on_option_selected(&mut self, search_term: &str);

    /// A recent search was picked; carries the formatted query text.
    fn on_recent_search_selected(&mut self, _query: &str) {}

    /// The pointer entered the row at `index` (recents are offset by the
    /// number of options).
    fn on_option_hover(&mut self, _index: usize) {}

    fn on_search_type_selected(&mut self, _search_type: SearchType) {}

    /// A search-type button gained focus.
    fn on_element_focus(&mut self) {}

    /// A search-type button lost focus.
    fn on_element_blur(&mut self) {}

    /// Mouse-down over the type selector or the option list.
    fn on_mouse_down(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_selection_requires_handler_and_unset_type() {
        let mut props = HintProps::new(&[]);
        assert_eq!(props.mode(), HintMode::Suggestions { search_type: None });

        props.type_selection_enabled = true;
        assert_eq!(props.mode(), HintMode::TypeSelection { file_search: true });

        props.search_type = Some(SearchType::Files);
        assert_eq!(
            props.mode(),
            HintMode::Suggestions {
                search_type: Some(SearchType::Files)
            }
        );
    }

    #[test]
    fn file_search_gates_buttons() {
        let enabled = HintMode::TypeSelection { file_search: true };
        let disabled = HintMode::TypeSelection { file_search: false };
        assert_eq!(enabled.search_types().len(), 2);
        assert_eq!(disabled.search_types(), &[SearchType::Messages]);
    }
}
