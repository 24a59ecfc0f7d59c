use iced::widget::{column, container, horizontal_space, row, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.editor.view(&self.document).map(Message::Editor),
            self.view_status_bar(),
        ];

        let background = self.theme.background.primary.to_iced();
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            })
            .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let (line, col) = self.document.cursor_position();
        let cursor_info = format!("Ln {}, Col {}", line + 1, col + 1);

        let file_info = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        let file_info = if self.modified {
            format!("{} [modified]", file_info)
        } else {
            file_info
        };

        let lines = match self.editor.line_count() {
            1 => "1 line".to_string(),
            n => format!("{} lines", n),
        };

        let muted = self.theme.foreground.muted.to_iced();
        let primary = self.theme.foreground.primary.to_iced();
        let accent = self.theme.foreground.accent.to_iced();

        let status_content = row![
            text(&self.status_message).size(12).color(muted),
            horizontal_space(),
            text(file_info).size(12).color(muted),
            Space::with_width(24),
            text(cursor_info).size(12).color(primary),
            Space::with_width(24),
            text(lines).size(12).color(accent),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        let background = self.theme.background.secondary.to_iced();
        let border = self.theme.ui.border.to_iced();

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(move |_| container::Style {
                background: Some(Background::Color(background)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
