//! Root view: the search bar above a one-line footer.

use crossterm::event::{KeyEvent, MouseEvent};
use murmur_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::components::{SearchBarComponent, component::Component};
use crate::app::{App, StatusLine};

#[derive(Debug, Default)]
pub struct MainView {
    search_bar: SearchBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any view needs animation ticks.
    pub fn is_animating(&self) -> bool {
        self.search_bar.is_animating()
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.search_bar.handle_message(app, &msg));
        effects
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        self.search_bar.handle_key_events(app, key)
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.search_bar.handle_mouse_events(app, mouse)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(app.ctx.theme.panel_style()), area);
        let [content, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        self.search_bar.render(frame, content, app);

        let theme = &*app.ctx.theme;
        let mut spans: Vec<Span<'static>> = Vec::new();
        match &app.status {
            Some(StatusLine::Info(text)) => spans.push(Span::styled(text.clone(), theme.status_style(false))),
            Some(StatusLine::Error(text)) => spans.push(Span::styled(text.clone(), theme.status_style(true))),
            None => {}
        }
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.extend(self.search_bar.get_hint_spans(app));
        frame.render_widget(Paragraph::new(Line::from(spans)), footer);
    }
}
