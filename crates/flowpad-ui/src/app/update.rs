use iced::widget::text_editor;
use iced::{keyboard, Task};

use flowpad_core::document;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(event) => {
                let output = self.editor.update(&mut self.document, event);

                if output.changed.is_some() {
                    self.modified = true;
                }
                if let Some(notice) = output.notice {
                    self.status_message = notice;
                }

                return output.task.map(Message::Editor);
            }

            Message::Save => {
                let Some(path) = self.path.clone() else {
                    self.status_message = "Nothing to save to: start flowpad with a file".to_string();
                    return Task::none();
                };

                let text = crate::components::diagram_editor::document_text(&self.document);
                return Task::perform(
                    async move {
                        document::save(&path, &text)
                            .map(|_| path)
                            .map_err(|e| format!("Failed to save: {}", e))
                    },
                    Message::FileSaved,
                );
            }

            Message::Reload => {
                let Some(path) = self.path.clone() else {
                    return Task::none();
                };

                return Task::perform(
                    async move {
                        document::load(&path).map_err(|e| format!("Failed to reload: {}", e))
                    },
                    Message::FileReloaded,
                );
            }

            Message::KeyPressed(key, modifiers) => {
                if let keyboard::Key::Character(c) = key.as_ref() {
                    if modifiers.command() {
                        match c {
                            "s" => return self.update(Message::Save),
                            "r" => return self.update(Message::Reload),
                            _ => {}
                        }
                    }
                }
            }

            Message::FileSaved(result) => match result {
                Ok(path) => {
                    self.modified = false;
                    self.status_message = format!("Saved {}", path.display());
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    self.status_message = e;
                }
            },

            Message::FileReloaded(result) => match result {
                Ok(text) => {
                    self.document = text_editor::Content::with_text(&text);
                    self.modified = false;
                    self.status_message = "Reloaded from disk".to_string();
                    return self.editor.document_replaced(&self.document).map(Message::Editor);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    self.status_message = e;
                }
            },
        }

        Task::none()
    }
}
