//! # Flowpad Syntax
//!
//! Lexing and markup rendering for the flow-chart diagram language.
//!
//! ## Why a hand-written lexer?
//!
//! The diagram language only needs five token rules, applied per line in a
//! fixed priority order:
//! - **`<br/>`**: escaped so it cannot inject markup
//! - **`#RRGGBB`**: colored with its own value
//! - **Keywords**: `graph`, `TD`, `LR`, `TB`, `RL` (whole words)
//! - **Node identifiers**: single letters, or words followed by a shape
//! - **Arrows**: `-->`
//!
//! A single left-to-right scan that tries the rules in that order produces
//! non-overlapping tokens, so later rules never see text an earlier rule
//! already claimed.
//!
//! ## Learning: Token Streams
//!
//! The lexer produces `(kind, range)` pairs instead of strings. Two renderers
//! consume the same stream:
//! - [`markup`] builds raw markup strings (one per line)
//! - the UI crate builds colored text widgets for its overlay

pub mod color;
pub mod lexer;
pub mod markup;
pub mod token;

pub use color::HexColor;
pub use lexer::{lex, lex_line, KEYWORDS};
pub use markup::{render, render_line, Palette};
pub use token::{LexedLine, Token, TokenKind};

/// Errors that can occur while handling diagram syntax.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Invalid hex color: {0:?} (expected #RRGGBB)")]
    InvalidHexColor(String),
}
