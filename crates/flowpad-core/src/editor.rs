//! Widget state orchestration.
//!
//! ## Learning: The Facade Pattern
//!
//! `EditorState` gives the UI one object to talk to. The UI reports what
//! happened (text changed, the caret moved, a surface scrolled, copy was
//! pressed, a timer fired) and gets back the work it has to do, if any.

use crate::config::EditorConfig;
use crate::feedback::{CopyFeedback, Ticket};
use crate::lines::LineIndex;
use crate::scroll::{ScrollOffset, ScrollSync, Surface, SyncWrite, Viewport};

/// Pixel metrics both surfaces are laid out with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Height of one text line.
    pub line_height: f32,
    /// Space above the first and below the last line.
    pub padding: f32,
}

impl Metrics {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            line_height: config.line_height_px(),
            padding: 0.0,
        }
    }

    fn is_valid(&self) -> bool {
        self.line_height.is_finite()
            && self.line_height > 0.0
            && self.padding.is_finite()
            && self.padding >= 0.0
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// Derived and transient state of one diagram editor widget.
///
/// The document text itself is not stored here: the caller owns it and
/// passes it in whenever it changes.
#[derive(Debug, Clone)]
pub struct EditorState {
    config: EditorConfig,
    metrics: Metrics,
    /// Visible height, once the scrolling container has reported it.
    viewport_height: Option<f32>,
    lines: LineIndex,
    scroll: ScrollSync,
    feedback: CopyFeedback,
}

impl EditorState {
    /// Creates state for a document that currently reads `text`.
    pub fn new(text: &str, config: EditorConfig) -> Self {
        let feedback = CopyFeedback::new(config.copy_feedback_delay());
        let mut metrics = Metrics::from_config(&config);
        if !metrics.is_valid() {
            tracing::warn!(?metrics, "unusable editor metrics, using defaults");
            metrics = Metrics::default();
        }

        Self {
            config,
            metrics,
            viewport_height: None,
            lines: LineIndex::new(text),
            scroll: ScrollSync::new(),
            feedback,
        }
    }

    /// Replaces the metrics used to convert lines to pixels.
    ///
    /// Returns `false` and keeps the current metrics if `metrics` is unusable.
    pub fn set_metrics(&mut self, metrics: Metrics) -> bool {
        if !metrics.is_valid() {
            tracing::warn!(?metrics, "ignoring unusable editor metrics");
            return false;
        }
        self.metrics = metrics;
        true
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    // ==================== Document ====================

    /// Called after every edit with the new text.
    ///
    /// Returns `true` if the line index had to be recomputed.
    pub fn text_changed(&mut self, text: &str) -> bool {
        self.lines.refresh(text)
    }

    /// Called when the caller swaps in an unrelated document.
    pub fn document_replaced(&mut self, text: &str) {
        self.lines.refresh(text);
        self.scroll.reset();
    }

    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    // ==================== Scrolling ====================

    /// Records what the scrolling overlay reported about itself.
    pub fn viewport_changed(&mut self, viewport: Viewport) -> Option<SyncWrite> {
        if viewport.height.is_finite() && viewport.height > 0.0 {
            self.viewport_height = Some(viewport.height);
        }
        self.scroll.scrolled(Surface::Overlay, viewport.offset)
    }

    /// Records a scroll of the input surface by whole lines.
    pub fn scrolled_lines(&mut self, lines: i32) -> Option<SyncWrite> {
        let current = self.scroll.offset(Surface::Input);
        let y = current.y + lines as f32 * self.metrics.line_height;
        self.scroll
            .scrolled(Surface::Input, ScrollOffset::new(current.x, self.clamp_y(y)))
    }

    /// Keeps the caret on 0-based line `line` visible.
    ///
    /// Returns the write that scrolls the overlay, if the caret left the
    /// viewport.
    pub fn caret_moved(&mut self, line: usize) -> Option<SyncWrite> {
        let height = self.viewport_height?;
        let Metrics { line_height, padding } = self.metrics;
        let current = self.scroll.offset(Surface::Input);

        let top = padding + line as f32 * line_height;
        let bottom = top + line_height;

        let y = if top < current.y {
            top - padding
        } else if bottom > current.y + height {
            bottom + padding - height
        } else {
            return None;
        };

        self.scroll
            .scrolled(Surface::Input, ScrollOffset::new(current.x, self.clamp_y(y)))
    }

    /// Largest vertical offset the overlay can reach.
    ///
    /// Zero until the viewport is known; the overlay only reports its
    /// viewport once the content overflows it.
    pub fn max_scroll_y(&self) -> f32 {
        let Some(height) = self.viewport_height else {
            return 0.0;
        };
        let Metrics { line_height, padding } = self.metrics;
        let content = self.lines.len() as f32 * line_height + 2.0 * padding;
        (content - height).max(0.0)
    }

    fn clamp_y(&self, y: f32) -> f32 {
        y.min(self.max_scroll_y()).max(0.0)
    }

    pub fn scroll_offset(&self, surface: Surface) -> ScrollOffset {
        self.scroll.offset(surface)
    }

    // ==================== Copy feedback ====================

    /// Called after the document was written to the clipboard.
    pub fn copied(&mut self) -> Ticket {
        self.feedback.activate()
    }

    /// Called when a copy feedback timer fires.
    pub fn copy_feedback_expired(&mut self, ticket: Ticket) -> bool {
        self.feedback.expire(ticket)
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
