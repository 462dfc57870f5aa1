//! Search-hint dropdown: search-type chooser, suggestion list and recent
//! searches.
//!
//! The panel keeps no state of its own besides what the terminal needs to
//! emulate a retained view: the geometry of the last render (for mouse
//! hit-testing), which item the pointer is over, which type button holds
//! focus, and the last observed highlight so keyboard navigation can bring
//! the highlighted row into view exactly once per change.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use murmur_util::Localizer;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use super::layout::{BUTTON_GAP, ContainerKind, HintLayout, HintTarget, button_text};
use super::model::{HintModel, HintRow};
use super::props::{HintHandler, HintMode, HintProps};
use super::scroll::{ScrollIntoView, ScrollIntoViewOptions};
use super::viewport::HintViewport;
use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "► ";
const PLAIN_SYMBOL: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HighlightKey {
    index: Option<usize>,
    via_key_press: bool,
}

#[derive(Debug, Default)]
pub struct HintPanel<S: ScrollIntoView = HintViewport> {
    scroller: S,
    layout: HintLayout,
    mode: Option<HintMode>,
    last_highlight: Option<HighlightKey>,
    hovered: Option<usize>,
    focused_button: Option<usize>,
    pressed_button: Option<usize>,
}

impl HintPanel<HintViewport> {
    pub fn new() -> Self {
        Self::with_scroller(HintViewport::new())
    }

    /// Advance smooth scrolling; returns `true` when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.scroller.tick()
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }
}

impl<S: ScrollIntoView> HintPanel<S> {
    pub fn with_scroller(scroller: S) -> Self {
        Self {
            scroller,
            layout: HintLayout::default(),
            mode: None,
            last_highlight: None,
            hovered: None,
            focused_button: None,
            pressed_button: None,
        }
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    #[cfg(test)]
    pub(crate) fn layout(&self) -> &HintLayout {
        &self.layout
    }

    /// Draw the panel into `area` and run the keyboard scroll reaction.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, props: &HintProps<'_>, localizer: &dyn Localizer, theme: &dyn Theme) {
        let model = HintModel::build(props, localizer);
        if self.mode != Some(model.mode) {
            debug!(mode = ?model.mode, "search hint mode changed");
            self.mode = Some(model.mode);
            self.hovered = None;
            self.focused_button = None;
            self.pressed_button = None;
        }

        self.layout = HintLayout::from_model(&model, area);
        self.scroller.set_extent(self.layout.content_height, area.height);
        self.sync_highlight(props);

        let lines = build_lines(&model, theme);
        Paragraph::new(lines)
            .style(theme.panel_style())
            .scroll((self.scroller.offset(), 0))
            .render(area, buf);
    }

    /// Route a mouse event to the handler. Returns `true` when the event
    /// happened over the panel.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, handler: &mut dyn HintHandler) -> bool {
        let inside = self.layout.area.contains(Position::new(mouse.column, mouse.row));
        let hit = self.layout.hit_test(mouse.column, mouse.row, self.scroller.offset());
        let item = hit.item.map(|item| (item.index, item.target.clone()));
        let container = hit.container;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(item, container, handler),
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(item, handler),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.handle_hover(item, handler),
            MouseEventKind::ScrollDown if inside => self.scroller.scroll_lines(1),
            MouseEventKind::ScrollUp if inside => self.scroller.scroll_lines(-1),
            _ => {}
        }
        inside
    }

    fn sync_highlight(&mut self, props: &HintProps<'_>) {
        let key = HighlightKey {
            index: props.highlighted_index,
            via_key_press: props.highlighted_via_key_press,
        };
        if self.last_highlight.replace(key) == Some(key) || !key.via_key_press {
            return;
        }
        // Index 0 is a real highlight and scrolls like any other, not "no highlight".
        let Some(index) = key.index else {
            return;
        };
        match self.layout.item(index) {
            Some(item) => {
                trace!(index, top = item.extent.top, "bringing highlighted hint into view");
                self.scroller.scroll_into_view(item.extent, ScrollIntoViewOptions::default());
            }
            None => trace!(index, "highlighted hint is not rendered"),
        }
    }

    fn handle_press(&mut self, item: Option<(usize, HintTarget)>, container: Option<ContainerKind>, handler: &mut dyn HintHandler) {
        match item {
            Some((index, HintTarget::SearchType(_))) => {
                handler.on_mouse_down();
                self.focus_button(Some(index), handler);
                self.pressed_button = Some(index);
            }
            Some((_, HintTarget::Option { search_term })) => {
                handler.on_option_selected(&search_term);
                handler.on_mouse_down();
            }
            Some((_, HintTarget::RecentSearch { query })) => {
                handler.on_recent_search_selected(&query);
            }
            None => {
                if matches!(container, Some(ContainerKind::TypeSelector | ContainerKind::OptionList)) {
                    handler.on_mouse_down();
                }
                self.focus_button(None, handler);
                self.pressed_button = None;
            }
        }
    }

    fn handle_release(&mut self, item: Option<(usize, HintTarget)>, handler: &mut dyn HintHandler) {
        let pressed = self.pressed_button.take();
        if let Some((index, HintTarget::SearchType(search_type))) = item
            && pressed == Some(index)
        {
            handler.on_search_type_selected(search_type);
        }
    }

    fn handle_hover(&mut self, item: Option<(usize, HintTarget)>, handler: &mut dyn HintHandler) {
        let hovered = match item {
            Some((index, HintTarget::Option { .. } | HintTarget::RecentSearch { .. })) => Some(index),
            _ => None,
        };
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if let Some(index) = hovered {
            handler.on_option_hover(index);
        }
    }

    fn focus_button(&mut self, button: Option<usize>, handler: &mut dyn HintHandler) {
        if self.focused_button == button {
            return;
        }
        if self.focused_button.is_some() {
            handler.on_element_blur();
        }
        self.focused_button = button;
        if button.is_some() {
            handler.on_element_focus();
        }
    }
}

fn build_lines(model: &HintModel, theme: &dyn Theme) -> Vec<Line<'static>> {
    let label_width = model
        .rows
        .iter()
        .filter_map(|row| match row {
            HintRow::Option(option) => Some(option.label.width()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        + 2;

    model
        .rows
        .iter()
        .map(|row| match row {
            HintRow::Heading(text) | HintRow::RecentTitle(text) => {
                Line::from(Span::styled(text.clone(), theme.heading_style()))
            }
            HintRow::TypeButtons(buttons) => {
                let gap = " ".repeat(usize::from(BUTTON_GAP));
                let mut spans = Vec::with_capacity(buttons.len() * 2);
                for (position, button) in buttons.iter().enumerate() {
                    if position > 0 {
                        spans.push(Span::raw(gap.clone()));
                    }
                    spans.push(Span::styled(button_text(&button.label), theme.button_style(button.highlighted)));
                }
                Line::from(spans)
            }
            HintRow::Option(option) => {
                let padding = " ".repeat(label_width.saturating_sub(option.label.width()));
                let line = Line::from(vec![
                    Span::raw(marker(option.highlighted)),
                    Span::styled(format!("{}{}", option.label, padding), theme.option_label_style()),
                    Span::styled(option.description.clone(), theme.muted_style()),
                ]);
                if option.highlighted {
                    line.style(theme.highlighted_row_style())
                } else {
                    line
                }
            }
            HintRow::Recent(recent) => {
                let line = Line::from(vec![
                    Span::raw(marker(recent.highlighted)),
                    Span::styled(recent.query.clone(), theme.text_style()),
                ]);
                if recent.highlighted {
                    line.style(theme.highlighted_row_style())
                } else {
                    line
                }
            }
        })
        .collect()
}

fn marker(highlighted: bool) -> &'static str {
    if highlighted { HIGHLIGHT_SYMBOL } else { PLAIN_SYMBOL }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::search_hint::scroll::ItemExtent;
    use crate::ui::theme::palettes::DuskTheme;
    use crossterm::event::KeyModifiers;
    use murmur_types::{MessageDescriptor, RecentSearchParams, SearchTerm, SearchType};
    use murmur_util::MessageCatalog;

    #[derive(Debug, Default)]
    struct RecordingScroller {
        calls: Vec<(ItemExtent, ScrollIntoViewOptions)>,
    }

    impl ScrollIntoView for RecordingScroller {
        fn scroll_into_view(&mut self, item: ItemExtent, options: ScrollIntoViewOptions) {
            self.calls.push((item, options));
        }
    }

    #[derive(Debug, Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl HintHandler for RecordingHandler {
        fn on_option_selected(&mut self, search_term: &str) {
            self.events.push(format!("option:{search_term}"));
        }
        fn on_recent_search_selected(&mut self, query: &str) {
            self.events.push(format!("recent:{query}"));
        }
        fn on_option_hover(&mut self, index: usize) {
            self.events.push(format!("hover:{index}"));
        }
        fn on_search_type_selected(&mut self, search_type: SearchType) {
            self.events.push(format!("type:{search_type}"));
        }
        fn on_element_focus(&mut self) {
            self.events.push("focus".into());
        }
        fn on_element_blur(&mut self) {
            self.events.push("blur".into());
        }
        fn on_mouse_down(&mut self) {
            self.events.push("mouse_down".into());
        }
    }

    /// Handler overriding only the required method.
    struct SelectOnly(Vec<String>);

    impl HintHandler for SelectOnly {
        fn on_option_selected(&mut self, search_term: &str) {
            self.0.push(search_term.to_string());
        }
    }

    fn options() -> Vec<SearchTerm> {
        vec![
            SearchTerm::new("from:", MessageDescriptor::new("hint.from", "Messages from a user"))
                .with_additional_display("from: @someone"),
            SearchTerm::new("in:", MessageDescriptor::new("hint.in", "Messages in a channel")),
            SearchTerm::new("on:", MessageDescriptor::new("hint.on", "Messages on a date")),
        ]
    }

    fn recents() -> Vec<RecentSearchParams> {
        vec![RecentSearchParams::new("in:   general"), RecentSearchParams::new("from: ada")]
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw<S: ScrollIntoView>(panel: &mut HintPanel<S>, props: &HintProps<'_>, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf, props, &MessageCatalog::builtin(), &DuskTheme::new());
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .filter_map(|x| buf.cell(Position::new(x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn keyboard_highlight_scrolls_exactly_once() {
        let options = options();
        let recents = recents();
        let area = Rect::new(0, 0, 50, 3);
        let mut panel = HintPanel::with_scroller(RecordingScroller::default());

        let mut props = HintProps::new(&options);
        props.recent_searches = Some(&recents);
        props.highlighted_index = Some(4);
        props.highlighted_via_key_press = true;

        draw(&mut panel, &props, area);
        draw(&mut panel, &props, area);
        // options (0..3), recent title (3), recents (4..6)
        assert_eq!(panel.scroller().calls.len(), 1);
        assert_eq!(panel.scroller().calls[0].0, ItemExtent::new(5, 1));
        assert_eq!(panel.scroller().calls[0].1, ScrollIntoViewOptions::default());

        props.highlighted_index = Some(1);
        draw(&mut panel, &props, area);
        assert_eq!(panel.scroller().calls.len(), 2);
        assert_eq!(panel.scroller().calls[1].0, ItemExtent::new(1, 1));
    }

    #[test]
    fn first_item_is_scrolled_to() {
        let options = options();
        let mut panel = HintPanel::with_scroller(RecordingScroller::default());
        let mut props = HintProps::new(&options);
        props.highlighted_index = Some(0);
        props.highlighted_via_key_press = true;
        draw(&mut panel, &props, Rect::new(0, 0, 50, 2));
        assert_eq!(panel.scroller().calls.len(), 1);
        assert_eq!(panel.scroller().calls[0].0, ItemExtent::new(0, 1));
    }

    #[test]
    fn pointer_highlight_never_scrolls() {
        let options = options();
        let area = Rect::new(0, 0, 50, 2);
        let mut panel = HintPanel::with_scroller(RecordingScroller::default());
        let mut props = HintProps::new(&options);

        for index in [2, 0, 1] {
            props.highlighted_index = Some(index);
            draw(&mut panel, &props, area);
        }
        assert!(panel.scroller().calls.is_empty());
    }

    #[test]
    fn unrendered_index_is_ignored() {
        let options = options();
        let mut panel = HintPanel::with_scroller(RecordingScroller::default());
        let mut props = HintProps::new(&options);
        props.highlighted_index = Some(17);
        props.highlighted_via_key_press = true;
        let buf = draw(&mut panel, &props, Rect::new(0, 0, 50, 4));
        assert!(panel.scroller().calls.is_empty());
        assert!((0..3).all(|y| !row_text(&buf, y).starts_with('►')));
    }

    #[test]
    fn highlighted_row_carries_marker() {
        let options = options();
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&options);
        props.highlighted_index = Some(1);
        let buf = draw(&mut panel, &props, Rect::new(0, 0, 50, 3));

        assert!(row_text(&buf, 0).starts_with("  from: @someone"));
        assert!(row_text(&buf, 1).starts_with("► in:"));
        assert!(row_text(&buf, 1).contains("Messages in a channel"));
        assert!(row_text(&buf, 2).starts_with("  on:"));
    }

    #[test]
    fn viewport_follows_keyboard_highlight() {
        let options = options();
        let recents = recents();
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&options);
        props.recent_searches = Some(&recents);
        props.highlighted_index = Some(4);
        props.highlighted_via_key_press = true;

        let area = Rect::new(0, 0, 50, 2);
        draw(&mut panel, &props, area);
        assert!(panel.is_animating());
        while panel.tick() {}

        let buf = draw(&mut panel, &props, area);
        let visible = format!("{}{}", row_text(&buf, 0), row_text(&buf, 1));
        assert!(visible.contains("► from: ada"));
    }

    #[test]
    fn clicking_option_dispatches_literal_term_once() {
        let options = options();
        let mut panel = HintPanel::new();
        draw(&mut panel, &HintProps::new(&options), Rect::new(0, 0, 50, 5));

        let mut handler = RecordingHandler::default();
        assert!(panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 0), &mut handler));
        panel.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 0), &mut handler);
        assert_eq!(handler.events, vec!["option:from:", "mouse_down"]);
    }

    #[test]
    fn clicking_recent_dispatches_formatted_query() {
        let options = options();
        let recents = recents();
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&options);
        props.recent_searches = Some(&recents);
        draw(&mut panel, &props, Rect::new(0, 0, 50, 8));

        let mut handler = RecordingHandler::default();
        panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), &mut handler);
        assert_eq!(handler.events, vec!["recent:in: general"]);
    }

    #[test]
    fn hover_reports_combined_index_once_per_item() {
        let options = options();
        let recents = recents();
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&options);
        props.recent_searches = Some(&recents);
        draw(&mut panel, &props, Rect::new(0, 0, 50, 8));

        let mut handler = RecordingHandler::default();
        panel.handle_mouse_event(mouse(MouseEventKind::Moved, 2, 2), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Moved, 9, 2), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Moved, 2, 3), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Moved, 2, 4), &mut handler);
        assert_eq!(handler.events, vec!["hover:2", "hover:3"]);
    }

    #[test]
    fn optional_callbacks_default_to_no_ops() {
        let options = options();
        let recents = recents();
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&options);
        props.recent_searches = Some(&recents);
        draw(&mut panel, &props, Rect::new(0, 0, 50, 8));

        let mut handler = SelectOnly(Vec::new());
        panel.handle_mouse_event(mouse(MouseEventKind::Moved, 2, 1), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 4), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 2), &mut handler);
        assert_eq!(handler.0, vec!["on:"]);
    }

    #[test]
    fn type_buttons_focus_then_select_on_release() {
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&[]);
        props.type_selection_enabled = true;
        let buf = draw(&mut panel, &props, Rect::new(0, 0, 40, 3));
        assert!(row_text(&buf, 0).starts_with("What are you searching for?"));
        assert!(row_text(&buf, 1).starts_with("[ Messages ]  [ Files ]"));

        let mut handler = RecordingHandler::default();
        panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 16, 1), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 16, 1), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 33, 0), &mut handler);
        assert_eq!(handler.events, vec!["mouse_down", "focus", "type:files", "mouse_down", "blur"]);
    }

    #[test]
    fn release_elsewhere_does_not_select_type() {
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&[]);
        props.type_selection_enabled = true;
        draw(&mut panel, &props, Rect::new(0, 0, 40, 3));

        let mut handler = RecordingHandler::default();
        panel.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 1), &mut handler);
        panel.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 16, 1), &mut handler);
        assert_eq!(handler.events, vec!["mouse_down", "focus"]);
    }

    #[test]
    fn file_search_disabled_renders_single_button() {
        let mut panel = HintPanel::new();
        let mut props = HintProps::new(&[]);
        props.type_selection_enabled = true;
        props.file_search_enabled = false;
        let buf = draw(&mut panel, &props, Rect::new(0, 0, 40, 3));
        assert_eq!(panel.layout().items.len(), 1);
        assert!(!row_text(&buf, 1).contains("Files"));
    }

    #[test]
    fn keyboard_highlighted_type_button_is_scrolled_to() {
        let mut panel = HintPanel::with_scroller(RecordingScroller::default());
        let mut props = HintProps::new(&[]);
        props.type_selection_enabled = true;
        props.highlighted_index = Some(1);
        props.highlighted_via_key_press = true;
        draw(&mut panel, &props, Rect::new(0, 0, 40, 1));

        // heading on row 0, both buttons share row 1
        assert_eq!(panel.scroller().calls.len(), 1);
        assert_eq!(panel.scroller().calls[0].0, ItemExtent::new(1, 1));
    }

    #[test]
    fn wheel_scrolls_only_inside_panel() {
        let options = options();
        let mut panel = HintPanel::new();
        let area = Rect::new(0, 1, 50, 2);
        draw(&mut panel, &HintProps::new(&options), area);

        let mut handler = RecordingHandler::default();
        assert!(!panel.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 2, 0), &mut handler));
        assert_eq!(panel.scroller().offset(), 0);
        assert!(panel.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 2, 1), &mut handler));
        assert_eq!(panel.scroller().offset(), 1);
        assert!(handler.events.is_empty());
    }
}
