use iced::widget::text_editor;
use iced::{keyboard, Subscription, Task};
use std::path::PathBuf;

use flowpad_core::Config;

use crate::components::DiagramEditor;
use crate::theme::Theme;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Launch parameters, resolved by the binary before the window opens.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File the document is saved back to, if any
    pub file: Option<PathBuf>,
    /// Initial document text
    pub text: String,
    pub config: Config,
    pub theme: Theme,
}

pub struct App {
    /// The document. Owned here, borrowed by the editor widget.
    pub document: text_editor::Content,
    pub editor: DiagramEditor,
    pub path: Option<PathBuf>,
    pub modified: bool,
    pub status_message: String,
    pub theme: Theme,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            file,
            text,
            config,
            theme,
        } = flags;

        let status_message = match &file {
            Some(_) => "Ready | Ctrl+S: Save | Ctrl+R: Reload".to_string(),
            None => "Ready | Unsaved scratch diagram".to_string(),
        };

        let app = Self {
            document: text_editor::Content::with_text(&text),
            editor: DiagramEditor::new(&text, &config, theme.clone()),
            path: file,
            modified: false,
            status_message,
            theme,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let name = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());

        let modified = if self.modified { " *" } else { "" };

        format!("{}{} - Flowpad", name, modified)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }

    pub fn iced_theme(&self) -> iced::Theme {
        self.theme.iced_theme()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(iced::Size::new(960.0, 720.0))
        .theme(App::iced_theme)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
