//! # Flowpad Core
//!
//! Framework-agnostic state behind the diagram editor widget.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    EditorState                        │
//! │  ┌─────────────┐ ┌──────────────┐ ┌────────────────┐ │
//! │  │  LineIndex  │ │  ScrollSync  │ │  CopyFeedback  │ │
//! │  │  (gutter)   │ │ input⇄overlay│ │  (2s ticket)   │ │
//! │  └─────────────┘ └──────────────┘ └────────────────┘ │
//! └──────────────────────────────────────────────────────┘
//!             ▲ document text is owned by the caller
//! ```
//!
//! Nothing here knows about a GUI toolkit. The UI crate feeds events in and
//! applies whatever writes come back out.

pub mod config;
pub mod document;
pub mod editor;
pub mod feedback;
pub mod lines;
pub mod scroll;

pub use config::{Config, ConfigError, EditorConfig};
pub use editor::{EditorState, Metrics};
pub use feedback::{CopyFeedback, Ticket};
pub use lines::LineIndex;
pub use scroll::{ScrollOffset, ScrollSync, Surface, SyncWrite, Viewport};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
