//! Line index backing the line number gutter.
//!
//! The index is derived from the document text and recomputed only when the
//! text actually changes. A 64-bit fingerprint of the last input stands in
//! for a copy of it, since the widget must not hold on to the document.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Line count of a document, memoized by content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    count: usize,
    text_len: usize,
    fingerprint: u64,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut index = Self {
            count: 1,
            text_len: 0,
            fingerprint: 0,
        };
        index.rebuild(text, fingerprint(text));
        index
    }

    /// Recomputes the index if `text` differs from the last input.
    ///
    /// Returns `true` if it was recomputed.
    pub fn refresh(&mut self, text: &str) -> bool {
        let fp = fingerprint(text);
        if fp == self.fingerprint && text.len() == self.text_len {
            return false;
        }
        self.rebuild(text, fp);
        tracing::debug!(lines = self.len(), "line index recomputed");
        true
    }

    fn rebuild(&mut self, text: &str, fp: u64) {
        self.count = text.matches('\n').count() + 1;
        self.text_len = text.len();
        self.fingerprint = fp;
    }

    /// Number of lines. Never zero: empty text has one empty line.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Never true, see [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The 1-based line numbers, `1..=len()`.
    pub fn numbers(&self) -> RangeInclusive<usize> {
        1..=self.len()
    }

    /// Digits needed to print the largest line number.
    pub fn gutter_digits(&self) -> usize {
        self.len().to_string().len()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new("")
    }
}

fn fingerprint(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
