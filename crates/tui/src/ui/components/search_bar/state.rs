//! State owned by the search bar: the query text, the chosen search type and
//! the highlight shared with the hint panel.

use murmur_types::{Effect, RecentSearchParams, SearchTerm, SearchType};
use murmur_util::format_recent_search;
use tracing::debug;

use super::hints;
use crate::ui::components::common::TextInputState;
use crate::ui::components::search_hint::{HintHandler, HintMode, HintProps};

#[derive(Debug, Clone)]
pub struct SearchBarState {
    input: TextInputState,
    search_type: Option<SearchType>,
    /// Full option set for the current search type.
    options: Vec<SearchTerm>,
    highlighted: Option<usize>,
    highlighted_via_key_press: bool,
    type_selection_enabled: bool,
    file_search_enabled: bool,
    recent_searches: Vec<RecentSearchParams>,
    /// Whether the text input (rather than a type button) owns focus.
    input_focused: bool,
}

impl SearchBarState {
    pub fn new(type_selection_enabled: bool, file_search_enabled: bool) -> Self {
        Self {
            input: TextInputState::new(),
            search_type: None,
            options: hints::options_for(None),
            highlighted: None,
            highlighted_via_key_press: false,
            type_selection_enabled,
            file_search_enabled,
            recent_searches: Vec::new(),
            input_focused: true,
        }
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn search_type(&self) -> Option<SearchType> {
        self.search_type
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_via_key_press(&self) -> bool {
        self.highlighted_via_key_press
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn recent_searches(&self) -> &[RecentSearchParams] {
        &self.recent_searches
    }

    pub fn set_recent_searches(&mut self, recent_searches: Vec<RecentSearchParams>) {
        self.recent_searches = recent_searches;
        if self.highlighted.is_some_and(|index| index >= self.selectable_count()) {
            self.highlighted = None;
        }
    }

    pub fn mode(&self) -> HintMode {
        HintMode::from_props(&self.hint_props(&[]))
    }

    /// Options matching the word under the cursor. A word that already equals
    /// a term (or has moved past it, like `from:ada`) matches nothing.
    pub fn visible_options(&self) -> Vec<SearchTerm> {
        let word = self.input.current_word().to_lowercase();
        self.options
            .iter()
            .filter(|option| {
                let term = option.search_term.to_lowercase();
                word.is_empty() || (term.starts_with(&word) && term != word)
            })
            .cloned()
            .collect()
    }

    /// Recent searches are offered only while nothing has been typed.
    pub fn visible_recents(&self) -> &[RecentSearchParams] {
        if self.input.is_blank() { &self.recent_searches } else { &[] }
    }

    /// Props for the hint panel; `options` must come from
    /// [`Self::visible_options`].
    pub fn hint_props<'a>(&'a self, options: &'a [SearchTerm]) -> HintProps<'a> {
        HintProps {
            options,
            recent_searches: Some(self.visible_recents()),
            highlighted_index: self.highlighted,
            highlighted_via_key_press: self.highlighted_via_key_press,
            search_type: self.search_type,
            with_title: true,
            file_search_enabled: self.file_search_enabled,
            type_selection_enabled: self.type_selection_enabled,
        }
    }

    pub fn selectable_count(&self) -> usize {
        match self.mode() {
            mode @ HintMode::TypeSelection { .. } => mode.search_types().len(),
            HintMode::Suggestions { .. } => self.visible_options().len() + self.visible_recents().len(),
        }
    }

    /// Move the highlight one step, wrapping at both ends.
    pub fn move_highlight(&mut self, forward: bool) {
        let count = self.selectable_count();
        if count == 0 {
            self.highlighted = None;
            return;
        }
        let next = match self.highlighted {
            Some(index) if index < count => {
                if forward {
                    (index + 1) % count
                } else {
                    (index + count - 1) % count
                }
            }
            _ if forward => 0,
            _ => count - 1,
        };
        self.highlighted = Some(next);
        self.highlighted_via_key_press = true;
    }

    pub fn hover(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.highlighted_via_key_press = false;
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
        self.highlighted_via_key_press = false;
    }

    pub fn select_search_type(&mut self, search_type: SearchType) {
        debug!(%search_type, "search type selected");
        self.search_type = Some(search_type);
        self.options = hints::options_for(Some(search_type));
        self.input_focused = true;
        self.clear_highlight();
    }

    /// Replace the word under the cursor with `search_term`. The phrase term
    /// leaves the cursor between its quotes.
    pub fn apply_option(&mut self, search_term: &str) {
        let range = self.input.current_word_range();
        let cursor_back = usize::from(search_term == "\"\"");
        self.input.replace_range(range, search_term, cursor_back);
        self.input_focused = true;
        self.clear_highlight();
    }

    /// Put a recent search back into the box and run it again.
    pub fn select_recent(&mut self, query: &str) -> Option<Effect> {
        let params = self
            .recent_searches
            .iter()
            .find(|params| format_recent_search(params) == query)
            .cloned()
            .unwrap_or_else(|| RecentSearchParams::new(query));
        self.input.set_input(query);
        self.clear_highlight();
        self.search(params)
    }

    /// Enter: act on the highlighted item, or submit the query.
    pub fn activate(&mut self) -> Option<Effect> {
        let mode = self.mode();
        let Some(index) = self.highlighted else {
            return match mode {
                HintMode::TypeSelection { .. } => None,
                HintMode::Suggestions { .. } => self.submit(),
            };
        };

        match mode {
            HintMode::TypeSelection { .. } => {
                if let Some(search_type) = mode.search_types().get(index) {
                    self.select_search_type(*search_type);
                }
                None
            }
            HintMode::Suggestions { .. } => {
                let options = self.visible_options();
                if let Some(option) = options.get(index) {
                    self.apply_option(&option.search_term);
                    return None;
                }
                let query = self.visible_recents().get(index - options.len()).map(format_recent_search);
                match query {
                    Some(query) => self.select_recent(&query),
                    None => {
                        self.clear_highlight();
                        self.submit()
                    }
                }
            }
        }
    }

    pub fn submit(&mut self) -> Option<Effect> {
        if self.input.is_blank() {
            return None;
        }
        let params = RecentSearchParams::new(self.input.input().trim());
        self.clear_highlight();
        self.search(params)
    }

    fn search(&self, params: RecentSearchParams) -> Option<Effect> {
        if format_recent_search(&params).is_empty() {
            return None;
        }
        Some(Effect::Search {
            params,
            search_type: self.search_type,
        })
    }

    /// Esc: drop the highlight first, then the query and search type.
    /// Returns `false` when there was nothing left to clear.
    pub fn escape(&mut self) -> bool {
        if self.highlighted.is_some() {
            self.clear_highlight();
            return true;
        }
        if self.search_type.is_none() && self.input.input().is_empty() {
            return false;
        }
        self.input.clear();
        self.search_type = None;
        self.options = hints::options_for(None);
        self.input_focused = true;
        true
    }

    pub fn insert_char(&mut self, c: char) {
        if matches!(self.mode(), HintMode::TypeSelection { .. }) {
            self.select_search_type(SearchType::Messages);
        }
        self.input.insert_char(c);
        self.input_focused = true;
        self.clear_highlight();
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
        self.clear_highlight();
    }

    pub fn move_cursor(&mut self, forward: bool) {
        if forward {
            self.input.move_right();
        } else {
            self.input.move_left();
        }
    }
}

/// Bridges hint-panel callbacks onto [`SearchBarState`], collecting the
/// effects they produce.
pub struct SearchBarHandler<'a> {
    state: &'a mut SearchBarState,
    effects: Vec<Effect>,
}

impl<'a> SearchBarHandler<'a> {
    pub fn new(state: &'a mut SearchBarState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}

impl HintHandler for SearchBarHandler<'_> {
    fn on_option_selected(&mut self, search_term: &str) {
        self.state.apply_option(search_term);
    }

    fn on_recent_search_selected(&mut self, query: &str) {
        self.effects.extend(self.state.select_recent(query));
    }

    fn on_option_hover(&mut self, index: usize) {
        self.state.hover(index);
    }

    fn on_search_type_selected(&mut self, search_type: SearchType) {
        self.state.select_search_type(search_type);
    }

    fn on_element_focus(&mut self) {
        self.state.input_focused = false;
    }

    fn on_element_blur(&mut self) {
        self.state.input_focused = true;
    }

    // Pressing inside the panel keeps the text input focused.
    fn on_mouse_down(&mut self) {
        self.state.input_focused = true;
    }
}
