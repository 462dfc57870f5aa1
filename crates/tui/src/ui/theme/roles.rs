use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Colors a palette assigns to each part of the search UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Panel and input fill.
    pub surface: Color,
    pub border: Color,
    pub border_focused: Color,

    /// Query text and recent searches.
    pub text: Color,
    /// Panel headings and block titles.
    pub heading: Color,
    /// Placeholder, option descriptions and footer hint text.
    pub muted: Color,

    /// Option labels (`from:`, `in:`) and footer key names.
    pub option_label: Color,
    /// Search-type buttons.
    pub button: Color,

    pub highlight_bg: Color,
    pub highlight_fg: Color,

    pub status_info: Color,
    pub status_error: Color,
}

/// Role-based style builders for the search bar and hint panel.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn panel_style(&self) -> Style {
        let roles = self.roles();
        Style::default().bg(roles.surface).fg(roles.text)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.border_focused } else { roles.border })
    }

    fn text_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }

    fn muted_style(&self) -> Style {
        Style::default().fg(self.roles().muted)
    }

    /// Panel headings such as the type-selection prompt.
    fn heading_style(&self) -> Style {
        Style::default().fg(self.roles().heading).add_modifier(Modifier::BOLD)
    }

    fn option_label_style(&self) -> Style {
        Style::default().fg(self.roles().option_label)
    }

    /// Search-type button; the highlighted one gets the highlight background.
    fn button_style(&self, highlighted: bool) -> Style {
        let roles = self.roles();
        let style = Style::default().fg(roles.button);
        if highlighted {
            return style.bg(roles.highlight_bg).add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Whole-row style for the highlighted option or recent search.
    fn highlighted_row_style(&self) -> Style {
        let roles = self.roles();
        Style::default()
            .fg(roles.highlight_fg)
            .bg(roles.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn status_style(&self, is_error: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if is_error { roles.status_error } else { roles.status_info })
    }

    /// Key name in the footer hint strip.
    fn hint_key_style(&self) -> Style {
        self.option_label_style().add_modifier(Modifier::BOLD)
    }
}
