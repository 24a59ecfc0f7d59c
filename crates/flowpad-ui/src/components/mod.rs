//! UI Components for the editor.
//!
//! Each component is a self-contained UI element that can be composed
//! into a host application.

pub mod diagram_editor;
pub mod overlay;

pub use diagram_editor::{DiagramEditor, Event, Output};
