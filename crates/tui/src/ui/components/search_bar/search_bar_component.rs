//! Search bar: the query input with the hint panel below it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use murmur_types::{Effect, Msg, SearchType};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::SearchBarHandler;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::search_hint::{HintMode, HintPanel};
use crate::ui::theme::theme_helpers as th;

const INPUT_HEIGHT: u16 = 3;
const PLACEHOLDER: &str = "Type a query";

#[derive(Debug, Default)]
pub struct SearchBarComponent {
    hint_panel: HintPanel,
}

impl SearchBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the hint panel is mid-scroll and wants fast ticks.
    pub fn is_animating(&self) -> bool {
        self.hint_panel.is_animating()
    }
}

fn input_title(search_type: Option<SearchType>) -> &'static str {
    match search_type {
        None => "Search",
        Some(SearchType::Messages) => "Search messages",
        Some(SearchType::Files) => "Search files",
    }
}

impl Component for SearchBarComponent {
    fn handle_message(&mut self, _app: &mut App, msg: &Msg) -> Vec<Effect> {
        if let Msg::Tick = msg {
            self.hint_panel.tick();
        }
        Vec::new()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.search_bar;
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up | KeyCode::BackTab => state.move_highlight(false),
            KeyCode::Down | KeyCode::Tab => state.move_highlight(true),
            KeyCode::Char('p') if control => state.move_highlight(false),
            KeyCode::Char('n') if control => state.move_highlight(true),
            KeyCode::Enter => return state.activate().into_iter().collect(),
            KeyCode::Esc => {
                if !state.escape() {
                    return vec![Effect::Quit];
                }
            }
            KeyCode::Backspace => state.backspace(),
            KeyCode::Left => state.move_cursor(false),
            KeyCode::Right => state.move_cursor(true),
            KeyCode::Char(c) if !control => state.insert_char(c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut handler = SearchBarHandler::new(&mut app.search_bar);
        self.hint_panel.handle_mouse_event(mouse, &mut handler);
        handler.into_effects()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [input_area, hint_area] = Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)]).areas(rect);
        let theme = &*app.ctx.theme;
        let state = &app.search_bar;

        let block = th::block(theme, Some(input_title(state.search_type())), state.is_input_focused());
        let inner = block.inner(input_area);
        let input = state.input();
        let line = if input.input().is_empty() {
            Line::from(Span::styled(PLACEHOLDER, theme.muted_style()))
        } else {
            Line::from(Span::styled(input.input().to_string(), theme.text_style()))
        };
        frame.render_widget(Paragraph::new(line).block(block), input_area);
        if state.is_input_focused() && inner.width > 0 {
            let column = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
            frame.set_cursor_position((inner.x + column.min(inner.width - 1), inner.y));
        }

        if hint_area.height == 0 {
            return;
        }
        let hint_block = th::block(theme, None, false);
        let hint_inner = hint_block.inner(hint_area);
        frame.render_widget(hint_block, hint_area);

        let options = state.visible_options();
        let props = state.hint_props(&options);
        self.hint_panel
            .render(hint_inner, frame.buffer_mut(), &props, app.ctx.localizer.as_ref(), theme);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let hints: &[(&'static str, &'static str)] = match app.search_bar.mode() {
            HintMode::TypeSelection { .. } => &[("↑/↓", " choose type  "), ("Enter", " select  "), ("Esc", " quit")],
            HintMode::Suggestions { .. } => &[
                ("↑/↓", " navigate  "),
                ("Enter", " apply/search  "),
                ("Esc", " clear  "),
                ("Ctrl+C", " quit"),
            ],
        };
        th::build_hint_spans(&*app.ctx.theme, hints)
    }
}
