//! The highlight overlay: line numbers plus colored tokens.
//!
//! Each document line becomes a row of `text` widgets, one per token, laid
//! out with the same font, size and line height as the input surface.

use iced::alignment::Horizontal;
use iced::widget::text::LineHeight;
use iced::widget::{text, Column, Row};
use iced::{Element, Font, Length, Padding, Pixels};

use flowpad_core::LineIndex;
use flowpad_syntax::{lex, HexColor, LexedLine, Palette, TokenKind};

use crate::style::EditorStyle;
use crate::theme::{Color, Theme};

/// Rendered in place of an empty line so it keeps its height.
const NBSP: &str = "\u{a0}";

/// Picks the display color of a token.
pub fn token_color(kind: TokenKind, fragment: &str, palette: &Palette, theme: &Theme) -> Color {
    match kind {
        TokenKind::HexColor => fragment
            .parse::<HexColor>()
            .map_or(theme.foreground.primary, Color::from),
        kind => palette
            .color_for(kind)
            .map_or(theme.foreground.primary, Color::from),
    }
}

/// Builds the overlay content for `text`.
pub fn view<'a, Message: 'a>(
    text: &str,
    lines: &LineIndex,
    palette: &Palette,
    theme: &Theme,
    style: &EditorStyle,
) -> Element<'a, Message> {
    let digits = lines.gutter_digits();
    let rows = lines
        .numbers()
        .zip(lex(text))
        .map(|(number, line)| view_line(number, &line, digits, palette, theme, style));

    Column::with_children(rows)
        .padding(Padding {
            top: style.padding,
            right: style.padding,
            bottom: style.padding,
            left: 0.0,
        })
        .into()
}

fn view_line<'a, Message: 'a>(
    number: usize,
    line: &LexedLine<'_>,
    digits: usize,
    palette: &Palette,
    theme: &Theme,
    style: &EditorStyle,
) -> Element<'a, Message> {
    let mut cells: Vec<Element<'a, Message>> = Vec::new();

    if style.line_numbers {
        cells.push(
            cell(number.to_string(), theme.foreground.muted, style)
                .width(Length::Fixed(style.gutter_width(digits) - style.line_number_padding))
                .align_x(Horizontal::Right)
                .into(),
        );
        cells.push(iced::widget::Space::with_width(style.line_number_padding + style.padding).into());
    } else {
        cells.push(iced::widget::Space::with_width(style.padding).into());
    }

    if line.is_empty() {
        cells.push(cell(NBSP.to_string(), theme.foreground.primary, style).into());
    } else {
        cells.extend(line.fragments().map(|(kind, fragment)| {
            let color = token_color(kind, fragment, palette, theme);
            cell(fragment.to_string(), color, style).into()
        }));
    }

    Row::with_children(cells)
        .height(Length::Fixed(style.line_height))
        .into()
}

fn cell<'a>(content: String, color: Color, style: &EditorStyle) -> iced::widget::Text<'a> {
    text(content)
        .font(Font::MONOSPACE)
        .size(style.font_size)
        .line_height(LineHeight::Absolute(Pixels(style.line_height)))
        .color(color.to_iced())
}
