//! Chrome colors for the editor window.
//!
//! Token colors come from [`flowpad_syntax::Palette`]; this module only
//! covers what surrounds them (backgrounds, gutter, caret, buttons).
//!
//! Themes are plain serde data, so a custom one is a JSON file:
//! ```rust,ignore
//! let theme = Theme::load(Path::new("solarized.json"))?;
//! ```

use serde::{Deserialize, Serialize};

use flowpad_syntax::HexColor;

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        let (r, g, b) = hex.to_rgb_f32();
        Self::rgb(r, g, b)
    }
}

/// Editor chrome theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground colors
    pub foreground: ForegroundColors,

    /// UI element colors
    pub ui: UiColors,
}

/// Background colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub gutter: Color,
    pub selection: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForegroundColors {
    pub primary: Color,
    pub muted: Color,
    pub accent: Color,
}

/// UI element colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiColors {
    pub border: Color,
    pub button: Color,
    pub button_hover: Color,
    pub tooltip: Color,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Flowpad Dark".to_string(),
            is_dark: true,
            background: BackgroundColors {
                primary: Color::rgb(0.10, 0.10, 0.12),
                secondary: Color::rgb(0.12, 0.12, 0.14),
                gutter: Color::rgb(0.11, 0.11, 0.13),
                selection: Color::rgba(0.25, 0.46, 0.85, 0.45),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.9, 0.9, 0.9),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.4, 0.6, 1.0),
            },
            ui: UiColors {
                border: Color::rgb(0.25, 0.25, 0.28),
                button: Color::rgb(0.2, 0.2, 0.22),
                button_hover: Color::rgb(0.25, 0.25, 0.28),
                tooltip: Color::rgb(0.15, 0.15, 0.17),
            },
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            name: "Flowpad Light".to_string(),
            is_dark: false,
            background: BackgroundColors {
                primary: Color::rgb(1.0, 1.0, 1.0),
                secondary: Color::rgb(0.97, 0.97, 0.97),
                gutter: Color::rgb(0.95, 0.95, 0.95),
                selection: Color::rgba(0.3, 0.5, 0.8, 0.3),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.1, 0.1, 0.1),
                muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.2, 0.4, 0.8),
            },
            ui: UiColors {
                border: Color::rgb(0.85, 0.85, 0.85),
                button: Color::rgb(0.92, 0.92, 0.92),
                button_hover: Color::rgb(0.88, 0.88, 0.88),
                tooltip: Color::rgb(0.97, 0.97, 0.97),
            },
        }
    }

    /// The matching built-in iced theme for stock widgets.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Loads a theme from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
