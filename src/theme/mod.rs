//! Colors for CLI output.
//!
//! Plain ANSI escape codes; no terminal library is involved. Setting
//! `NO_COLOR` turns every helper into a pass-through.

pub mod cli;
pub mod types;

pub use cli::{ansi, color_to_ansi, ANSI_RESET};
pub use types::{type_badge, type_color};

/// Terminal color used by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Gray,
    DarkGray,
    LightGreen,
    LightYellow,
    White,
    /// 24-bit color, used for type badges
    Rgb(u8, u8, u8),
}

/// Theme configuration for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for names and headers
    pub accent: Color,
    /// Error/notice color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// When false every helper returns its input unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::pokedex()
    }
}

impl Theme {
    /// Light gray text with a yellow accent.
    pub fn pokedex() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightYellow,
            error: Color::Red,
            success: Color::LightGreen,
            enabled: true,
        }
    }

    /// Same palette with escape codes switched off.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::pokedex()
        }
    }
}

/// Theme for this process; honours `NO_COLOR`.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
