//! Token types produced by the lexer.

use std::ops::Range;

/// Classification of a lexed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Text no rule claimed.
    Text,
    /// A literal `<br/>`, rendered escaped.
    LineBreakTag,
    /// A `#RRGGBB` literal, rendered in its own color.
    HexColor,
    /// A reserved word such as `graph` or `TD`.
    Keyword,
    /// A node identifier (the shape that may follow is not part of it).
    Node,
    /// The `-->` arrow.
    Operator,
}

/// A span of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range into the line.
    pub range: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }

    /// Returns the slice of `line` this token covers.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range.clone()]
    }
}

/// One line of a document together with its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedLine<'a> {
    /// 1-based line number.
    pub number: usize,
    pub text: &'a str,
    pub tokens: Vec<Token>,
}

impl LexedLine<'_> {
    /// Iterates `(kind, text)` pairs in line order.
    pub fn fragments(&self) -> impl Iterator<Item = (TokenKind, &str)> + '_ {
        self.tokens.iter().map(|t| (t.kind, t.text(self.text)))
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
