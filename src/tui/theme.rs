// Theme system for the TUI
//
// A theme is a flat set of colors for every UI element. The active theme is
// picked once from config (`theme = "dark" | "light" | "nord"`).

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Get display name (also the config value, lowercased)
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Look up a theme by config name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color, // Focused border
    pub border_type: BorderType,

    // Title and hints
    pub title: Color,
    pub muted: Color,

    // Selection
    pub selection: Color,
    pub selection_fg: Color,

    // Hero rows
    pub hero_id: Color,
    pub heading: Color,

    // Log levels / message feed
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            highlight: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            muted: Color::DarkGray,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            hero_id: Color::LightBlue,
            heading: Color::Yellow,

            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Blue,
            debug: Color::Gray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            highlight: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            muted: Color::Gray,

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            hero_id: Color::Blue,
            heading: Color::Magenta,

            error: Color::Red,
            warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            info: Color::Blue,
            debug: Color::DarkGray,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            highlight: Color::Rgb(136, 192, 208),
            border_type: BorderType::Rounded,

            title: Color::Rgb(136, 192, 208),
            muted: Color::Rgb(76, 86, 106),

            selection: Color::Rgb(67, 76, 94),
            selection_fg: Color::Rgb(235, 203, 139),

            hero_id: Color::Rgb(129, 161, 193),
            heading: Color::Rgb(235, 203, 139),

            error: Color::Rgb(191, 97, 106),
            warn: Color::Rgb(235, 203, 139),
            info: Color::Rgb(129, 161, 193),
            debug: Color::Rgb(76, 86, 106),
        }
    }

    /// Border style for a panel, brighter when focused
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.highlight } else { self.border })
    }

    /// Style for the selected row
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }
}
