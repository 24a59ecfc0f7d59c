//! Metrics shared by the input surface and the overlay.
//!
//! Both surfaces must lay text out identically or the colored glyphs drift
//! away from the caret, so every size they use comes from here.

use flowpad_core::{EditorConfig, Metrics};

/// Monospace advance width relative to the font size.
const CHAR_WIDTH_RATIO: f32 = 0.6;

/// Styles for the diagram editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorStyle {
    pub font_size: f32,
    /// Absolute line height in pixels.
    pub line_height: f32,
    pub padding: f32,
    pub line_number_padding: f32,
    pub line_numbers: bool,
    pub copy_button_padding: f32,
}

impl EditorStyle {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            font_size: config.font_size,
            line_height: config.line_height_px(),
            line_numbers: config.line_numbers,
            ..Self::default()
        }
    }

    /// Width of the line number gutter for numbers of `digits` digits.
    pub fn gutter_width(&self, digits: usize) -> f32 {
        if !self.line_numbers {
            return 0.0;
        }
        digits as f32 * self.font_size * CHAR_WIDTH_RATIO + 2.0 * self.line_number_padding
    }

    /// Vertical metrics both surfaces are laid out with.
    pub fn metrics(&self) -> Metrics {
        Metrics {
            line_height: self.line_height,
            padding: self.padding,
        }
    }

    /// Left inset of the text on both surfaces.
    pub fn text_inset(&self, digits: usize) -> f32 {
        self.gutter_width(digits) + self.padding
    }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: 21.0,
            padding: 16.0,
            line_number_padding: 8.0,
            line_numbers: true,
            copy_button_padding: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_grows_with_digits() {
        let style = EditorStyle::default();
        assert!(style.gutter_width(3) > style.gutter_width(1));
        assert_eq!(style.text_inset(2), style.gutter_width(2) + style.padding);
    }

    #[test]
    fn test_metrics_follow_style() {
        let style = EditorStyle {
            line_height: 30.0,
            padding: 4.0,
            ..EditorStyle::default()
        };
        let metrics = style.metrics();
        assert_eq!(metrics.line_height, 30.0);
        assert_eq!(metrics.padding, 4.0);
    }

    #[test]
    fn test_hidden_gutter_has_no_width() {
        let config = EditorConfig {
            line_numbers: false,
            ..EditorConfig::default()
        };
        let style = EditorStyle::from_config(&config);
        assert_eq!(style.gutter_width(4), 0.0);
        assert_eq!(style.text_inset(4), style.padding);
    }
}
