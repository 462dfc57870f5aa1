//! Render model for the search-hint panel.
//!
//! [`HintModel::build`] turns props into a flat list of rows with their
//! selectable indices and highlight flags resolved, so highlight rules can be
//! checked without a terminal buffer.

use murmur_types::SearchType;
use murmur_util::{Localizer, format_recent_search};

use super::messages;
use super::props::{HintMode, HintProps};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeButton {
    pub index: usize,
    pub search_type: SearchType,
    pub label: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub label: String,
    pub description: String,
    pub search_term: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRow {
    /// Selectable index: options length plus position in the recent list.
    pub index: usize,
    pub query: String,
    pub highlighted: bool,
}

/// One content line of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintRow {
    Heading(String),
    TypeButtons(Vec<TypeButton>),
    Option(OptionRow),
    RecentTitle(String),
    Recent(RecentRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintModel {
    pub mode: HintMode,
    pub rows: Vec<HintRow>,
}

impl HintModel {
    pub fn build(props: &HintProps<'_>, localizer: &dyn Localizer) -> Self {
        let mode = props.mode();
        let is_highlighted = |index: usize| props.highlighted_index == Some(index);
        let mut rows = Vec::new();

        match mode {
            HintMode::TypeSelection { .. } => {
                rows.push(HintRow::Heading(localizer.localize(&messages::search_type_question())));
                let buttons = mode
                    .search_types()
                    .iter()
                    .enumerate()
                    .map(|(index, search_type)| TypeButton {
                        index,
                        search_type: *search_type,
                        label: localizer.localize(&messages::search_type_label(*search_type)),
                        highlighted: is_highlighted(index),
                    })
                    .collect();
                rows.push(HintRow::TypeButtons(buttons));
            }
            HintMode::Suggestions { search_type } => {
                if props.with_title {
                    rows.push(HintRow::Heading(localizer.localize(&messages::title(search_type))));
                }

                rows.extend(props.options.iter().enumerate().map(|(index, option)| {
                    HintRow::Option(OptionRow {
                        index,
                        label: option.label().to_string(),
                        description: localizer.localize(&option.message),
                        search_term: option.search_term.clone(),
                        highlighted: is_highlighted(index),
                    })
                }));

                if let Some(recent_searches) = props.recent_searches
                    && !recent_searches.is_empty()
                {
                    rows.push(HintRow::RecentTitle(localizer.localize(&messages::recent_searches())));
                    let offset = props.options.len();
                    rows.extend(recent_searches.iter().enumerate().map(|(local_index, params)| {
                        let index = offset + local_index;
                        HintRow::Recent(RecentRow {
                            index,
                            query: format_recent_search(params),
                            highlighted: is_highlighted(index),
                        })
                    }));
                }
            }
        }

        Self { mode, rows }
    }

    /// Selectable indices currently marked highlighted.
    pub fn highlighted_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        for row in &self.rows {
            match row {
                HintRow::TypeButtons(buttons) => {
                    indices.extend(buttons.iter().filter(|button| button.highlighted).map(|button| button.index));
                }
                HintRow::Option(option) if option.highlighted => indices.push(option.index),
                HintRow::Recent(recent) if recent.highlighted => indices.push(recent.index),
                _ => {}
            }
        }
        indices
    }

    pub fn type_buttons(&self) -> &[TypeButton] {
        self.rows
            .iter()
            .find_map(|row| match row {
                HintRow::TypeButtons(buttons) => Some(buttons.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn headings(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                HintRow::Heading(text) | HintRow::RecentTitle(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
