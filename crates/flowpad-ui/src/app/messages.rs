use iced::keyboard;
use std::path::PathBuf;

use crate::components;

#[derive(Debug, Clone)]
pub enum Message {
    // Editor widget
    Editor(components::Event),

    // File operations
    Save,
    Reload,

    // Keyboard
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Async results
    FileSaved(Result<PathBuf, String>),
    FileReloaded(Result<String, String>),
}
