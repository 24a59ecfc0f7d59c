//! Line lexer for the diagram language.
//!
//! Every line is scanned once, left to right. At each position the rules are
//! tried in priority order; the first that matches claims its bytes and the
//! scan resumes after it. Bytes no rule claims are merged into `Text` tokens,
//! so the tokens of a line always cover it exactly.

use crate::color::HexColor;
use crate::token::{LexedLine, Token, TokenKind};

/// Reserved words of the diagram language.
pub const KEYWORDS: &[&str] = &["graph", "TD", "LR", "TB", "RL"];

const LINE_BREAK_TAG: &str = "<br/>";
const ARROW: &str = "-->";
const HEX_LITERAL_LEN: usize = 7;

/// Word characters for boundary purposes. Non-ASCII letters count so that
/// `Größe` stays one word, but only ASCII words are ever classified.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lexes every line of `text`. Both `\n` and `\r\n` end a line.
///
/// Empty input still yields one (empty) line.
pub fn lex(text: &str) -> Vec<LexedLine<'_>> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(idx, line)| LexedLine {
            number: idx + 1,
            text: line,
            tokens: lex_line(line),
        })
        .collect()
}

/// Lexes a single line (without its line terminator).
pub fn lex_line(line: &str) -> Vec<Token> {
    let len = line.len();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < len {
        let rest = &line[i..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        let claimed = if rest.starts_with(LINE_BREAK_TAG) {
            Some((TokenKind::LineBreakTag, LINE_BREAK_TAG.len()))
        } else if c == '#' && hex_literal_at(line, i) {
            Some((TokenKind::HexColor, HEX_LITERAL_LEN))
        } else if is_word_char(c) && !line[..i].chars().next_back().is_some_and(is_word_char) {
            let end = word_end(line, i);
            match classify_word(line, i, end) {
                Some(kind) => Some((kind, end - i)),
                None => {
                    // Unclaimed words are skipped whole so a suffix can never
                    // be mistaken for a word start.
                    i = end;
                    continue;
                }
            }
        } else if rest.starts_with(ARROW) {
            Some((TokenKind::Operator, ARROW.len()))
        } else {
            None
        };

        match claimed {
            Some((kind, width)) => {
                if text_start < i {
                    tokens.push(Token::new(TokenKind::Text, text_start..i));
                }
                tokens.push(Token::new(kind, i..i + width));
                i += width;
                text_start = i;
            }
            None => i += c.len_utf8(),
        }
    }

    if text_start < len {
        tokens.push(Token::new(TokenKind::Text, text_start..len));
    }

    tokens
}

fn hex_literal_at(line: &str, at: usize) -> bool {
    let end = at + HEX_LITERAL_LEN;
    let Some(literal) = line.get(at..end) else {
        return false;
    };
    // `#abcdef12` is not a color; the literal must end at a word boundary.
    HexColor::is_literal(literal) && !line[end..].chars().next().is_some_and(is_word_char)
}

fn word_end(line: &str, start: usize) -> usize {
    line[start..]
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(line.len(), |(offset, _)| start + offset)
}

fn classify_word(line: &str, start: usize, end: usize) -> Option<TokenKind> {
    let word = &line[start..end];

    if KEYWORDS.contains(&word) {
        return Some(TokenKind::Keyword);
    }

    if word.len() == 1 && word.as_bytes()[0].is_ascii_alphabetic() {
        return Some(TokenKind::Node);
    }

    if word.bytes().all(|b| b.is_ascii_alphanumeric()) && shape_follows(line, end) {
        return Some(TokenKind::Node);
    }

    None
}

/// True if a `(`…`)` or `[`…`]` shape opens at `at` and closes later on the line.
fn shape_follows(line: &str, at: usize) -> bool {
    let rest = &line[at..];
    let close = match rest.as_bytes().first() {
        Some(b'(') => ')',
        Some(b'[') => ']',
        _ => return false,
    };
    rest[1..].contains(close)
}
