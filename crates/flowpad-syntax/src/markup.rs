//! Markup rendering.
//!
//! Each line becomes a raw markup string: colored tokens are wrapped in
//! `<span style="color: …">` and `<br/>` is escaped. Nothing else is escaped,
//! so the output is only as safe as its input apart from that one tag.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::lexer::{lex, lex_line};
use crate::token::TokenKind;

/// What an empty line renders as, so it keeps its height.
pub const EMPTY_LINE: &str = "&nbsp;";

/// Escaped form of a literal `<br/>`.
pub const ESCAPED_LINE_BREAK: &str = "&lt;br/&gt;";

/// Fixed colors for the token classes that are not self-colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub keyword: HexColor,
    pub node: HexColor,
    pub operator: HexColor,
}

impl Palette {
    /// Returns the palette color for `kind`, if the kind uses one.
    pub fn color_for(&self, kind: TokenKind) -> Option<HexColor> {
        match kind {
            TokenKind::Keyword => Some(self.keyword),
            TokenKind::Node => Some(self.node),
            TokenKind::Operator => Some(self.operator),
            TokenKind::Text | TokenKind::LineBreakTag | TokenKind::HexColor => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            keyword: HexColor::new(0xc6, 0x78, 0xdd), // Purple
            node: HexColor::new(0x61, 0xaf, 0xef),    // Blue
            operator: HexColor::new(0xe5, 0xc0, 0x7b), // Yellow
        }
    }
}

/// Renders every line of `text`.
pub fn render(text: &str, palette: &Palette) -> Vec<String> {
    let lines: Vec<String> = lex(text)
        .iter()
        .map(|line| render_line(line.text, palette))
        .collect();
    tracing::trace!(lines = lines.len(), "rendered diagram markup");
    lines
}

/// Renders a single line.
pub fn render_line(line: &str, palette: &Palette) -> String {
    if line.is_empty() {
        return EMPTY_LINE.to_string();
    }

    let mut out = String::with_capacity(line.len() * 2);
    for token in lex_line(line) {
        let text = token.text(line);
        match token.kind {
            TokenKind::Text => out.push_str(text),
            TokenKind::LineBreakTag => out.push_str(ESCAPED_LINE_BREAK),
            // The literal is its own color value.
            TokenKind::HexColor => push_span(&mut out, text, text),
            kind => match palette.color_for(kind) {
                Some(color) => push_span(&mut out, &color.to_string(), text),
                None => out.push_str(text),
            },
        }
    }
    out
}

fn push_span(out: &mut String, color: &str, text: &str) {
    out.push_str("<span style=\"color: ");
    out.push_str(color);
    out.push_str("\">");
    out.push_str(text);
    out.push_str("</span>");
}
