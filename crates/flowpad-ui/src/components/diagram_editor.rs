//! The diagram editor widget.
//!
//! ## Learning: Layered Surfaces
//!
//! ```text
//! ┌──────────────────────────── stack ───────────────────────────┐
//! │ copy button                                        [ Copy ]  │  top
//! │ ┌──────────────────── scrollable ──────────────────────────┐ │
//! │ │ text_editor   caret + selection, glyphs transparent      │ │
//! │ │ column        line numbers + colored tokens              │ │
//! │ └──────────────────────────────────────────────────────────┘ │
//! │ gutter strip                                                 │  bottom
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The input surface sits above the overlay so it receives pointer and
//! keyboard input; its own text is painted transparent, which leaves the
//! overlay's colored glyphs visible exactly underneath the caret.
//!
//! Both layers share one scrollable. The editor is as tall as its text, so
//! it never scrolls on its own: wheel and scrollbar move both layers
//! together, and caret movement past the viewport edge becomes a
//! `scroll_to` on the shared scrollable.
//!
//! The component follows the Elm shape used by the rest of the UI: it has
//! its own [`Event`] type, an `update` that returns an [`Output`], and a
//! `view`. The document [`Content`](text_editor::Content) stays with the
//! caller and is only borrowed.

use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar};
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{button, container, scrollable, stack, text, text_editor, tooltip};
use iced::{Background, Border, Element, Font, Length, Padding, Pixels, Task};

use flowpad_core::{Config, EditorState, ScrollOffset, Surface, SyncWrite, Ticket, Viewport};
use flowpad_syntax::Palette;

use super::overlay;
use crate::style::EditorStyle;
use crate::theme::{Color, Theme};

/// Events produced by the widget.
#[derive(Debug, Clone)]
pub enum Event {
    /// The input surface produced an action (edit, caret move, scroll).
    Action(text_editor::Action),
    /// The shared scrollable moved or was resized.
    OverlayScrolled(Viewport),
    /// The copy button was pressed.
    CopyPressed,
    /// A copy feedback timer fired.
    CopyFeedbackExpired(Ticket),
}

/// What the caller has to act on after [`DiagramEditor::update`].
pub struct Output {
    /// The new document text, if an edit happened.
    pub changed: Option<String>,
    /// A non-fatal message worth showing to the user.
    pub notice: Option<String>,
    /// Follow-up work (scroll writes, feedback timers).
    pub task: Task<Event>,
}

impl Output {
    fn none() -> Self {
        Self {
            changed: None,
            notice: None,
            task: Task::none(),
        }
    }

    fn task(task: Task<Event>) -> Self {
        Self { task, ..Self::none() }
    }
}

/// State of one diagram editor.
pub struct DiagramEditor {
    state: EditorState,
    palette: Palette,
    style: EditorStyle,
    theme: Theme,
    overlay_id: scrollable::Id,
}

impl DiagramEditor {
    /// Creates the widget for a document that currently reads `text`.
    pub fn new(text: &str, config: &Config, theme: Theme) -> Self {
        let style = EditorStyle::from_config(&config.editor);
        let mut state = EditorState::new(text, config.editor.clone());
        state.set_metrics(style.metrics());

        Self {
            state,
            palette: config.palette,
            style,
            theme,
            overlay_id: scrollable::Id::unique(),
        }
    }

    /// Replaces the style hook.
    ///
    /// Scroll positions are computed with the style's line height from now on.
    pub fn with_style(mut self, style: EditorStyle) -> Self {
        self.state.set_metrics(style.metrics());
        self.style = style;
        self
    }

    /// Call after the caller replaced the whole document.
    pub fn document_replaced(&mut self, content: &text_editor::Content) -> Task<Event> {
        self.state.document_replaced(&document_text(content));
        scrollable::scroll_to(self.overlay_id.clone(), AbsoluteOffset { x: 0.0, y: 0.0 })
    }

    pub fn is_copy_feedback_active(&self) -> bool {
        self.state.copy_feedback().is_active()
    }

    pub fn line_count(&self) -> usize {
        self.state.lines().len()
    }

    pub fn update(&mut self, content: &mut text_editor::Content, event: Event) -> Output {
        match event {
            // The editor is laid out at full height, so it only reports
            // line steps that the shared scrollable has to carry out.
            Event::Action(text_editor::Action::Scroll { lines }) => {
                let write = self.state.scrolled_lines(lines);
                Output::task(self.write_overlay(write))
            }

            Event::Action(action) => {
                let is_edit = action.is_edit();
                content.perform(action);

                let changed = is_edit.then(|| {
                    let text = document_text(content);
                    self.state.text_changed(&text);
                    text
                });

                let (line, _) = content.cursor_position();
                let write = self.state.caret_moved(line);

                Output {
                    changed,
                    task: self.write_overlay(write),
                    ..Output::none()
                }
            }

            Event::OverlayScrolled(viewport) => {
                // The input rides along inside the scrollable; recording the
                // write is all it needs.
                self.state.viewport_changed(viewport);
                Output::none()
            }

            Event::CopyPressed => {
                let text = document_text(content);
                let bytes = text.len();

                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
                    Ok(()) => {
                        tracing::info!(bytes, "copied diagram to clipboard");
                        let ticket = self.state.copied();
                        let timer = self.state.copy_feedback().reset_after(ticket);
                        Output::task(Task::perform(timer, Event::CopyFeedbackExpired))
                    }
                    Err(e) => {
                        tracing::warn!("Clipboard write failed: {}", e);
                        Output {
                            notice: Some(format!("Copy failed: {}", e)),
                            ..Output::none()
                        }
                    }
                }
            }

            Event::CopyFeedbackExpired(ticket) => {
                self.state.copy_feedback_expired(ticket);
                Output::none()
            }
        }
    }

    fn write_overlay(&self, write: Option<SyncWrite>) -> Task<Event> {
        match write {
            Some(SyncWrite { target: Surface::Overlay, offset }) => scrollable::scroll_to(
                self.overlay_id.clone(),
                AbsoluteOffset {
                    x: offset.x,
                    y: offset.y,
                },
            ),
            _ => Task::none(),
        }
    }

    pub fn view<'a>(&'a self, content: &'a text_editor::Content) -> Element<'a, Event> {
        let text = document_text(content);
        let digits = self.state.lines().gutter_digits();
        let style = &self.style;
        let theme = &self.theme;

        let background = theme.background.primary.to_iced();
        let gutter = theme.background.gutter.to_iced();
        let gutter_width = style.gutter_width(digits);

        let placeholder = theme.foreground.muted.to_iced();
        let caret = theme.foreground.accent.to_iced();
        let selection = theme.background.selection.to_iced();

        let overlay = overlay::view(&text, self.state.lines(), &self.palette, theme, style);

        let input = text_editor(content)
            .placeholder(self.state.config().placeholder.as_str())
            .font(Font::MONOSPACE)
            .size(style.font_size)
            .line_height(LineHeight::Absolute(Pixels(style.line_height)))
            .wrapping(Wrapping::None)
            .padding(Padding {
                top: style.padding,
                right: style.padding,
                bottom: style.padding,
                left: style.text_inset(digits),
            })
            .height(Length::Shrink)
            .style(move |_theme, _status| text_editor::Style {
                background: Background::Color(iced::Color::TRANSPARENT),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: iced::Color::TRANSPARENT,
                },
                icon: placeholder,
                placeholder,
                value: Color::TRANSPARENT.to_iced(),
                selection,
            })
            .on_action(Event::Action);

        let hidden = Scrollbar::new().width(0.0).scroller_width(0.0);
        let surfaces = scrollable(stack![overlay, input])
            .id(self.overlay_id.clone())
            .direction(Direction::Vertical(hidden))
            .on_scroll(|viewport| Event::OverlayScrolled(to_viewport(&viewport)))
            .width(Length::Fill)
            .height(Length::Fill);

        let gutter_strip = container(iced::widget::Space::new(gutter_width, Length::Fill))
            .style(move |_| container::Style {
                background: Some(Background::Color(gutter)),
                ..Default::default()
            });

        let copy = container(self.view_copy_button(caret))
            .width(Length::Fill)
            .align_right(Length::Fill)
            .padding(style.copy_button_padding);

        container(stack![gutter_strip, surfaces, copy])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            })
            .into()
    }

    fn view_copy_button(&self, accent: iced::Color) -> Element<'_, Event> {
        let active = self.is_copy_feedback_active();
        let (label, hint) = if active {
            ("Copied!", "Copied to clipboard")
        } else {
            ("Copy", "Copy diagram source")
        };

        let idle = self.theme.ui.button.to_iced();
        let hover = self.theme.ui.button_hover.to_iced();
        let border = self.theme.ui.border.to_iced();
        let label_color = if active {
            accent
        } else {
            self.theme.foreground.primary.to_iced()
        };

        let copy_button = button(text(label).size(12).color(label_color))
            .padding(Padding::from([4, 10]))
            .style(move |_, status| {
                let bg = match status {
                    button::Status::Hovered | button::Status::Pressed => hover,
                    _ => idle,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: label_color,
                    border: Border {
                        color: border,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(Event::CopyPressed);

        let tip_bg = self.theme.ui.tooltip.to_iced();
        let tip = container(text(hint).size(12))
            .padding(6)
            .style(move |_| container::Style {
                background: Some(Background::Color(tip_bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        tooltip(copy_button, tip, tooltip::Position::Left).into()
    }
}

fn to_viewport(viewport: &scrollable::Viewport) -> Viewport {
    let offset = viewport.absolute_offset();
    Viewport {
        offset: ScrollOffset::new(offset.x, offset.y),
        height: viewport.bounds().height,
    }
}

/// The document as the user sees it.
///
/// `Content::text` may report a trailing line terminator the editor does not
/// show as a line; drop it so line numbers match the editor's own count.
pub fn document_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') && text.split('\n').count() > content.line_count() {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> (DiagramEditor, text_editor::Content) {
        let editor = DiagramEditor::new(text, &Config::default(), Theme::dark());
        (editor, text_editor::Content::with_text(text))
    }

    /// 50 lines; with the default 21px lines and 16px padding the content
    /// is 1082px tall.
    fn long_editor() -> (DiagramEditor, text_editor::Content) {
        editor(&vec!["A-->B"; 50].join("\n"))
    }

    /// The shared scrollable reporting a 210px tall viewport at `y`.
    fn scrolled_to(y: f32) -> Event {
        Event::OverlayScrolled(Viewport {
            offset: ScrollOffset::new(0.0, y),
            height: 210.0,
        })
    }

    fn type_text(editor: &mut DiagramEditor, content: &mut text_editor::Content, s: &str) -> Option<String> {
        let mut last = None;
        for c in s.chars() {
            let action = text_editor::Action::Edit(text_editor::Edit::Insert(c));
            if let Some(text) = editor.update(content, Event::Action(action)).changed {
                last = Some(text);
            }
        }
        last
    }

    #[test]
    fn test_document_text_matches_content() {
        let content = text_editor::Content::with_text("graph TD\nA-->B");
        assert_eq!(document_text(&content), "graph TD\nA-->B");
    }

    #[test]
    fn test_edits_notify_caller() {
        let (mut editor, mut content) = editor("");
        let changed = type_text(&mut editor, &mut content, "A-->B");
        assert_eq!(changed.as_deref(), Some("A-->B"));
    }

    #[test]
    fn test_new_line_grows_gutter() {
        let (mut editor, mut content) = editor("graph TD");
        assert_eq!(editor.line_count(), 1);

        content.perform(text_editor::Action::Move(text_editor::Motion::DocumentEnd));
        let enter = text_editor::Action::Edit(text_editor::Edit::Enter);
        let output = editor.update(&mut content, Event::Action(enter));

        assert_eq!(output.changed.as_deref(), Some("graph TD\n"));
        assert_eq!(editor.line_count(), 2);
    }

    #[test]
    fn test_caret_moves_do_not_notify() {
        let (mut editor, mut content) = editor("A-->B");
        let action = text_editor::Action::Move(text_editor::Motion::Right);
        assert!(editor.update(&mut content, Event::Action(action)).changed.is_none());
    }

    #[test]
    fn test_wheel_lines_scroll_overlay() {
        let (mut editor, mut content) = long_editor();
        editor.update(&mut content, scrolled_to(0.0));

        let scroll = text_editor::Action::Scroll { lines: 3 };
        editor.update(&mut content, Event::Action(scroll));

        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 63.0);
        assert_eq!(editor.state.scroll_offset(Surface::Input).y, 63.0);
    }

    #[test]
    fn test_wheel_overscroll_stops_at_bottom() {
        let (mut editor, mut content) = long_editor();
        editor.update(&mut content, scrolled_to(0.0));

        let down = text_editor::Action::Scroll { lines: 45 };
        editor.update(&mut content, Event::Action(down));
        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 872.0);

        let up = text_editor::Action::Scroll { lines: -3 };
        editor.update(&mut content, Event::Action(up));
        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 872.0 - 63.0);
    }

    #[test]
    fn test_overlay_scroll_moves_input_once() {
        let (mut editor, mut content) = long_editor();

        editor.update(&mut content, scrolled_to(100.0));
        assert_eq!(editor.state.scroll_offset(Surface::Input).y, 100.0);

        // Reporting the same position again is an echo.
        let echo = Viewport {
            offset: ScrollOffset::new(0.0, 100.0),
            height: 210.0,
        };
        assert_eq!(editor.state.viewport_changed(echo), None);
        editor.update(&mut content, Event::OverlayScrolled(echo));
        assert_eq!(editor.state.scroll_offset(Surface::Input).y, 100.0);
    }

    #[test]
    fn test_caret_past_viewport_scrolls_overlay() {
        let (mut editor, mut content) = long_editor();
        editor.update(&mut content, scrolled_to(0.0));

        let end = text_editor::Action::Move(text_editor::Motion::DocumentEnd);
        let output = editor.update(&mut content, Event::Action(end));
        assert!(output.changed.is_none());
        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 872.0);

        let start = text_editor::Action::Move(text_editor::Motion::DocumentStart);
        editor.update(&mut content, Event::Action(start));
        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 0.0);
    }

    #[test]
    fn test_typing_new_lines_keeps_caret_in_view() {
        let (mut editor, mut content) = editor("graph TD");
        editor.update(&mut content, scrolled_to(0.0));

        content.perform(text_editor::Action::Move(text_editor::Motion::DocumentEnd));
        for _ in 0..12 {
            let enter = text_editor::Action::Edit(text_editor::Edit::Enter);
            editor.update(&mut content, Event::Action(enter));
        }

        // Caret on line 12: 16 + 13 * 21 + 16 - 210.
        assert_eq!(editor.line_count(), 13);
        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 95.0);
    }

    #[test]
    fn test_style_line_height_drives_scrolling() {
        let (editor, mut content) = long_editor();
        let mut editor = editor.with_style(EditorStyle {
            line_height: 30.0,
            ..EditorStyle::default()
        });
        editor.update(&mut content, scrolled_to(0.0));

        let scroll = text_editor::Action::Scroll { lines: 3 };
        editor.update(&mut content, Event::Action(scroll));

        assert_eq!(editor.state.scroll_offset(Surface::Overlay).y, 90.0);
    }

    #[test]
    fn test_copy_sets_feedback_or_reports_failure() {
        let (mut editor, mut content) = editor("graph TD\nA-->B");
        let output = editor.update(&mut content, Event::CopyPressed);

        // Without a reachable clipboard the flag stays down and the caller
        // gets a notice instead.
        assert_ne!(editor.is_copy_feedback_active(), output.notice.is_some());
    }

    #[test]
    fn test_stale_copy_timer_keeps_feedback() {
        let (mut editor, mut content) = editor("A");
        let first = editor.state.copied();
        let second = editor.state.copied();

        editor.update(&mut content, Event::CopyFeedbackExpired(first));
        assert!(editor.is_copy_feedback_active());

        editor.update(&mut content, Event::CopyFeedbackExpired(second));
        assert!(!editor.is_copy_feedback_active());
    }

    #[test]
    fn test_style_hook() {
        let style = EditorStyle {
            line_numbers: false,
            ..EditorStyle::default()
        };
        let (editor, _) = editor("A");
        let editor = editor.with_style(style.clone());
        assert_eq!(editor.style, style);
    }
}
