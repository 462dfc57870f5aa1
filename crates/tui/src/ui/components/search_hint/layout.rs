//! Geometry of the rendered panel: where each selectable item sits, used for
//! mouse hit-testing and for bringing the highlighted item into view.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use murmur_types::SearchType;

use super::model::{HintModel, HintRow};
use super::scroll::ItemExtent;

/// Columns between two type buttons.
pub const BUTTON_GAP: u16 = 2;

/// What activating an item does. Payloads are captured at render time so a
/// click dispatches exactly what was on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintTarget {
    SearchType(SearchType),
    Option { search_term: String },
    RecentSearch { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRegion {
    /// Selectable index (button index, or option/recent index).
    pub index: usize,
    pub target: HintTarget,
    pub extent: ItemExtent,
    /// Horizontal span relative to the panel's left edge.
    pub x: u16,
    pub width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    TypeSelector,
    OptionList,
    RecentList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRegion {
    pub kind: ContainerKind,
    pub extent: ItemExtent,
}

/// Result of mapping a screen position onto the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hit<'a> {
    pub item: Option<&'a ItemRegion>,
    pub container: Option<ContainerKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintLayout {
    pub area: Rect,
    pub content_height: u16,
    pub items: Vec<ItemRegion>,
    pub containers: Vec<ContainerRegion>,
}

/// Text drawn for a type button.
pub fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

impl HintLayout {
    /// Lay the model out one row per [`HintRow`], starting at content row 0.
    pub fn from_model(model: &HintModel, area: Rect) -> Self {
        let mut items = Vec::new();
        let mut option_rows: Option<ItemExtent> = None;
        let mut recent_rows: Option<ItemExtent> = None;

        for (row_index, row) in model.rows.iter().enumerate() {
            let top = u16::try_from(row_index).unwrap_or(u16::MAX);
            let extent = ItemExtent::new(top, 1);
            match row {
                HintRow::TypeButtons(buttons) => {
                    let mut x = 0u16;
                    for button in buttons {
                        let width = u16::try_from(button_text(&button.label).width()).unwrap_or(u16::MAX);
                        items.push(ItemRegion {
                            index: button.index,
                            target: HintTarget::SearchType(button.search_type),
                            extent,
                            x,
                            width,
                        });
                        x = x.saturating_add(width).saturating_add(BUTTON_GAP);
                    }
                }
                HintRow::Option(option) => {
                    items.push(ItemRegion {
                        index: option.index,
                        target: HintTarget::Option {
                            search_term: option.search_term.clone(),
                        },
                        extent,
                        x: 0,
                        width: area.width,
                    });
                    grow(&mut option_rows, extent);
                }
                HintRow::Recent(recent) => {
                    items.push(ItemRegion {
                        index: recent.index,
                        target: HintTarget::RecentSearch {
                            query: recent.query.clone(),
                        },
                        extent,
                        x: 0,
                        width: area.width,
                    });
                    grow(&mut recent_rows, extent);
                }
                HintRow::Heading(_) | HintRow::RecentTitle(_) => {}
            }
        }

        let content_height = u16::try_from(model.rows.len()).unwrap_or(u16::MAX);
        let mut containers = Vec::new();
        if model.type_buttons().is_empty() {
            containers.extend(option_rows.map(|extent| ContainerRegion {
                kind: ContainerKind::OptionList,
                extent,
            }));
            containers.extend(recent_rows.map(|extent| ContainerRegion {
                kind: ContainerKind::RecentList,
                extent,
            }));
        } else {
            containers.push(ContainerRegion {
                kind: ContainerKind::TypeSelector,
                extent: ItemExtent::new(0, content_height),
            });
        }

        Self {
            area,
            content_height,
            items,
            containers,
        }
    }

    pub fn item(&self, index: usize) -> Option<&ItemRegion> {
        self.items.iter().find(|item| item.index == index)
    }

    /// Map a screen cell to the item and container under it, given the
    /// current scroll offset.
    pub fn hit_test(&self, column: u16, row: u16, offset: u16) -> Hit<'_> {
        if !self.area.contains(Position::new(column, row)) {
            return Hit::default();
        }
        let content_row = row - self.area.y + offset;
        let content_column = column - self.area.x;

        let item = self.items.iter().find(|item| {
            item.extent.contains_row(content_row)
                && content_column >= item.x
                && content_column < item.x.saturating_add(item.width)
        });
        let container = self
            .containers
            .iter()
            .find(|container| container.extent.contains_row(content_row))
            .map(|container| container.kind);
        Hit { item, container }
    }
}

fn grow(span: &mut Option<ItemExtent>, extent: ItemExtent) {
    *span = Some(match span {
        Some(existing) => ItemExtent::new(existing.top, extent.bottom() - existing.top),
        None => extent,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::search_hint::props::HintProps;
    use murmur_types::{MessageDescriptor, RecentSearchParams, SearchTerm};
    use murmur_util::MessageCatalog;

    fn options() -> Vec<SearchTerm> {
        vec![
            SearchTerm::new("from:", MessageDescriptor::new("hint.from", "Messages from a user")),
            SearchTerm::new("in:", MessageDescriptor::new("hint.in", "Messages in a channel")),
        ]
    }

    #[test]
    fn suggestion_rows_follow_titles() {
        let options = options();
        let recents = vec![RecentSearchParams::new("in: general")];
        let mut props = HintProps::new(&options);
        props.with_title = true;
        props.recent_searches = Some(&recents);
        let model = HintModel::build(&props, &MessageCatalog::builtin());
        let layout = HintLayout::from_model(&model, Rect::new(2, 4, 30, 10));

        // title, two options, recent title, one recent
        assert_eq!(layout.content_height, 5);
        assert_eq!(layout.item(0).map(|item| item.extent.top), Some(1));
        assert_eq!(layout.item(1).map(|item| item.extent.top), Some(2));
        assert_eq!(layout.item(2).map(|item| item.extent.top), Some(4));
        assert!(layout.item(3).is_none());

        let hit = layout.hit_test(5, 4 + 2, 0);
        assert_eq!(hit.item.map(|item| item.index), Some(1));
        assert_eq!(hit.container, Some(ContainerKind::OptionList));

        let hit = layout.hit_test(5, 4 + 4, 0);
        assert_eq!(
            hit.item.map(|item| item.target.clone()),
            Some(HintTarget::RecentSearch {
                query: "in: general".into()
            })
        );
        assert_eq!(hit.container, Some(ContainerKind::RecentList));

        // heading row is neither an item nor a container
        assert_eq!(layout.hit_test(5, 4, 0), Hit::default());
        // outside the panel
        assert_eq!(layout.hit_test(0, 0, 0), Hit::default());
    }

    #[test]
    fn hit_test_accounts_for_scroll_offset() {
        let options = options();
        let model = HintModel::build(&HintProps::new(&options), &MessageCatalog::builtin());
        let layout = HintLayout::from_model(&model, Rect::new(0, 0, 30, 1));
        assert_eq!(layout.hit_test(3, 0, 1).item.map(|item| item.index), Some(1));
    }

    #[test]
    fn buttons_are_laid_out_side_by_side() {
        let mut props = HintProps::new(&[]);
        props.type_selection_enabled = true;
        let model = HintModel::build(&props, &MessageCatalog::builtin());
        let layout = HintLayout::from_model(&model, Rect::new(0, 0, 40, 4));

        let messages = layout.item(0).unwrap();
        let files = layout.item(1).unwrap();
        assert_eq!(messages.x, 0);
        assert_eq!(messages.width, 12); // "[ Messages ]"
        assert_eq!(files.x, 12 + BUTTON_GAP);
        assert_eq!(files.extent.top, 1);

        assert_eq!(layout.hit_test(13, 1, 0).item, None);
        assert_eq!(layout.hit_test(13, 1, 0).container, Some(ContainerKind::TypeSelector));
        assert_eq!(
            layout.hit_test(15, 1, 0).item.map(|item| item.target.clone()),
            Some(HintTarget::SearchType(SearchType::Files))
        );
    }
}
