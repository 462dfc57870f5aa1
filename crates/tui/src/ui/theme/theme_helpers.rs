use ratatui::{
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::Theme;

/// Rounded block with the panel fill, a focus-aware border and an optional
/// heading-styled title.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(theme.panel_style());
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.heading_style()));
    }
    block
}

/// Build `key description` pairs for the hints strip.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.hint_key_style()));
        spans.push(Span::styled(*description, theme.muted_style()));
    }
    spans
}
