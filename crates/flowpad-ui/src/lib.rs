//! # Flowpad UI
//!
//! The diagram editor widget and a small host window, built on iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events that can occur
//! - **Update**: (state, message) -> new state + follow-up tasks
//! - **View**: state -> UI elements
//!
//! The widget itself ([`components::DiagramEditor`]) has the same shape, so
//! a host embeds it by mapping its events and tasks into its own messages.

pub mod app;
pub mod components;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags};
pub use components::DiagramEditor;
pub use style::EditorStyle;
pub use theme::Theme;
