//! Theme styling module for the TUI UI layer.
//!
//! Palettes map onto semantic roles; components use the role-based style
//! builders and helpers here instead of hard-coded colors.

use std::env;

use tracing::debug;

pub mod palettes;
pub mod roles;
pub mod theme_helpers;

pub use palettes::ThemeDefinition;
pub use roles::Theme;

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on `MURMUR_THEME`, the configured preference, and
/// terminal capabilities.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if detect_color_capability() == ColorCapability::Ansi256 {
        debug!("ANSI-only terminal detected; using fallback palette");
        return LoadedTheme::from_definition(palettes::default_ansi());
    }

    if let Ok(theme_name) = env::var("MURMUR_THEME")
        && let Some(definition) = palettes::resolve(theme_name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = palettes::resolve(name.trim())
    {
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(palettes::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}
