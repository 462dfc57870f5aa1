//! Built-in palettes: a truecolor default and an indexed fallback for
//! terminals without 24-bit color.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dusk palette
pub const SLATE: Color = Color::Rgb(0x26, 0x2B, 0x36); // #262b36 - panel surface
pub const SLATE_LIGHT: Color = Color::Rgb(0x3A, 0x41, 0x50); // #3a4150 - borders / selection
pub const FOG: Color = Color::Rgb(0xD7, 0xDC, 0xE5); // #d7dce5 - body text
pub const HAZE: Color = Color::Rgb(0x9A, 0xA5, 0xB8); // #9aa5b8 - secondary text
pub const DUSK: Color = Color::Rgb(0x65, 0x70, 0x85); // #657085 - muted text
pub const EMBER: Color = Color::Rgb(0xF2, 0x9E, 0x6B); // #f29e6b - interactive accent
pub const TIDE: Color = Color::Rgb(0x6C, 0xC4, 0xD9); // #6cc4d9 - focus accent
pub const MOSS: Color = Color::Rgb(0x95, 0xC9, 0x7E); // #95c97e - status
pub const BRICK: Color = Color::Rgb(0xE0, 0x6C, 0x75); // #e06c75 - errors

/// Default theme tuned for dark truecolor terminals.
#[derive(Debug, Clone)]
pub struct DuskTheme {
    roles: ThemeRoles,
}

impl DuskTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                surface: SLATE,
                border: SLATE_LIGHT,
                border_focused: TIDE,

                text: FOG,
                heading: HAZE,
                muted: DUSK,

                option_label: EMBER,
                button: TIDE,

                highlight_bg: SLATE_LIGHT,
                highlight_fg: FOG,

                status_info: MOSS,
                status_error: BRICK,
            },
        }
    }
}

impl Default for DuskTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DuskTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Indexed-color fallback for 8-bit terminals.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                surface: Color::Indexed(236),
                border: Color::Indexed(240),
                border_focused: Color::Indexed(80),

                text: Color::Indexed(252),
                heading: Color::Indexed(248),
                muted: Color::Indexed(243),

                option_label: Color::Indexed(209),
                button: Color::Indexed(80),

                highlight_bg: Color::Indexed(239),
                highlight_fg: Color::Indexed(255),

                status_info: Color::Indexed(114),
                status_error: Color::Indexed(167),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Describes a selectable palette.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used in config and `MURMUR_THEME`.
    pub id: &'static str,
    pub label: &'static str,
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dusk",
        label: "Dusk",
        aliases: &["dusk", "default"],
        is_ansi_fallback: false,
        factory: || Box::new(DuskTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Look up a definition by id or alias, ignoring case.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let needle = name.to_ascii_lowercase();
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == needle || definition.aliases.iter().any(|alias| *alias == needle))
}

pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[1]
}
