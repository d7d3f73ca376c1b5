// Color theme definitions for the TUI chrome.

use ratatui::style::Color;

pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

/// Named color slots used by the UI (borders, text, cards, badges).
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand color: logo, focused card border, primary buttons.
    pub primary: Color,
    /// Row titles and secondary highlights.
    pub secondary: Color,
    /// Normal text color.
    pub text: Color,
    /// Dimmed / inactive text color.
    pub text_dim: Color,
    /// Key hints.
    pub accent: Color,
    /// Background of the focused card.
    pub selection_bg: Color,
    /// Border and divider color.
    pub border: Color,
    /// Nav bar background once the page has scrolled.
    pub nav_bg: Color,
    /// Skeleton placeholder blocks.
    pub skeleton: Color,
    /// Rating stars.
    pub rating: Color,
    /// Error indicators.
    pub error: Color,
    /// "Match" badge.
    pub success: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(229, 9, 20),
            secondary: Color::Rgb(229, 229, 229),
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Yellow,
            selection_bg: Color::Rgb(40, 40, 40),
            border: Color::DarkGray,
            nav_bg: Color::Rgb(20, 20, 20),
            skeleton: Color::Rgb(51, 51, 51),
            rating: Color::Rgb(245, 197, 24),
            error: Color::Red,
            success: Color::Rgb(70, 211, 105),
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(185, 9, 11),
            secondary: Color::Rgb(40, 40, 40),
            text: Color::Black,
            text_dim: Color::DarkGray,
            accent: Color::Rgb(180, 120, 0),
            selection_bg: Color::Rgb(225, 225, 225),
            border: Color::Rgb(180, 180, 180),
            nav_bg: Color::Rgb(240, 240, 240),
            skeleton: Color::Rgb(210, 210, 210),
            rating: Color::Rgb(180, 120, 0),
            error: Color::Red,
            success: Color::Rgb(0, 140, 60),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            THEME_LIGHT => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
