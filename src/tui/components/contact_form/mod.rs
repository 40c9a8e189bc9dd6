//! # ContactForm Component
//!
//! The name / email / message form under the Contact card, its submit button,
//! and the feedback line.
//!
//! ## State Management
//!
//! Field values live in `Page::form` so the reducer can clear them when a
//! delivery is accepted. This component only owns focus and the validation
//! hint (`ContactFormState`). Editing goes through `ContactFormEditor`, a
//! transient wrapper that borrows both for the duration of one event.
//!
//! Editing is append-only: the cursor always sits after the last character.
//!
//! ## Layout
//!
//! [`FormLayout`] is computed from the field values alone, so the page can
//! size the scroll canvas, hit-test clicks, and place the cursor without
//! rendering first.

mod text_wrap;
pub mod validate;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::submission::{SubmissionPhase, SubmissionStatus};
use crate::relay::ContactFields;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use text_wrap::{
    BORDER_OFFSET, HORIZONTAL_OVERHEAD, PADDING, VERTICAL_OVERHEAD, end_position, inner_width,
    wrap_line_count,
};
use validate::validate;

/// Rows the message box shows even when empty.
const MESSAGE_MIN_LINES: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "you@example.com",
            Field::Message => "Write your message...",
        }
    }

    fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    fn multiline(self) -> bool {
        matches!(self, Field::Message)
    }

    fn value(self, fields: &ContactFields) -> &str {
        match self {
            Field::Name => &fields.name,
            Field::Email => &fields.email,
            Field::Message => &fields.message,
        }
    }

    fn value_mut(self, fields: &mut ContactFields) -> &mut String {
        match self {
            Field::Name => &mut fields.name,
            Field::Email => &mut fields.email,
            Field::Message => &mut fields.message,
        }
    }
}

/// High-level events emitted while editing the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Enter on the message field with every check passing.
    Submit,
    /// Esc: back to browsing.
    Leave,
    /// A field value changed.
    Changed,
    /// Enter on the message field, but a check failed. Focus moved to the
    /// offending field and the hint is set.
    Invalid,
}

/// Persistent form state (focus and hint). Field values are in `Page`.
pub struct ContactFormState {
    pub focus: Field,
    pub hint: Option<&'static str>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            focus: Field::Name,
            hint: None,
        }
    }

    pub fn focus(&mut self, field: Field) {
        self.focus = field;
        self.hint = None;
    }
}

/// Transient editing wrapper: borrows the form state and the page's fields
/// for one event.
pub struct ContactFormEditor<'a> {
    state: &'a mut ContactFormState,
    fields: &'a mut ContactFields,
    in_flight: bool,
}

impl<'a> ContactFormEditor<'a> {
    pub fn new(
        state: &'a mut ContactFormState,
        fields: &'a mut ContactFields,
        in_flight: bool,
    ) -> Self {
        Self {
            state,
            fields,
            in_flight,
        }
    }

    fn push_str(&mut self, text: &str) -> Option<FormEvent> {
        let field = self.state.focus;
        let text = if field.multiline() {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        if text.is_empty() {
            return None;
        }
        field.value_mut(self.fields).push_str(&text);
        self.state.hint = None;
        Some(FormEvent::Changed)
    }

    fn try_submit(&mut self) -> Option<FormEvent> {
        if self.in_flight {
            self.state.hint = Some("Already sending, hang on.");
            return None;
        }
        match validate(self.fields) {
            Ok(()) => {
                self.state.hint = None;
                Some(FormEvent::Submit)
            }
            Err(invalid) => {
                self.state.focus = invalid.field;
                self.state.hint = Some(invalid.reason);
                Some(FormEvent::Invalid)
            }
        }
    }
}

impl<'a> EventHandler for ContactFormEditor<'a> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Leave),
            TuiEvent::NextField => {
                self.state.focus(self.state.focus.next());
                None
            }
            TuiEvent::PrevField => {
                self.state.focus(self.state.focus.prev());
                None
            }
            TuiEvent::Submit => match self.state.focus {
                Field::Message => self.try_submit(),
                field => {
                    self.state.focus(field.next());
                    None
                }
            },
            TuiEvent::Newline => {
                if self.state.focus.multiline() {
                    self.push_str("\n")
                } else {
                    None
                }
            }
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.push_str(c.encode_utf8(&mut buf))
            }
            TuiEvent::Paste(text) => self.push_str(text),
            TuiEvent::Backspace => {
                let value = self.state.focus.value_mut(self.fields);
                value.pop()?;
                self.state.hint = None;
                Some(FormEvent::Changed)
            }
            _ => None,
        }
    }
}

/// Where everything in the form goes, relative to the form's own area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    /// Total height, borders included.
    pub height: u16,
    pub labels: [Rect; 3],
    pub boxes: [Rect; 3],
    pub button: Rect,
    pub feedback: Rect,
    pub hint: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect, fields: &ContactFields) -> Self {
        let content_x = area.x + BORDER_OFFSET + PADDING;
        let content_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let text_width = inner_width(content_width);

        let mut y = area.y + BORDER_OFFSET;
        let mut labels = [Rect::default(); 3];
        let mut boxes = [Rect::default(); 3];
        for (i, field) in Field::ALL.iter().enumerate() {
            labels[i] = Rect::new(content_x, y, content_width, 1);
            y += 1;

            let mut rows = wrap_line_count(field.value(fields), text_width);
            if field.multiline() {
                rows = rows.max(MESSAGE_MIN_LINES);
            }
            let box_height = rows + VERTICAL_OVERHEAD;
            boxes[i] = Rect::new(content_x, y, content_width, box_height);
            y += box_height;
        }

        // Blank row, then button, feedback and hint rows
        y += 1;
        let button = Rect::new(content_x, y, content_width, 1);
        let feedback = Rect::new(content_x, y + 1, content_width, 1);
        let hint = Rect::new(content_x, y + 2, content_width, 1);
        let height = (hint.bottom() - area.y) + BORDER_OFFSET;

        Self {
            height,
            labels,
            boxes,
            button,
            feedback,
            hint,
        }
    }

    /// Field whose label or box contains the position.
    pub fn field_at(&self, position: Position) -> Option<Field> {
        Field::ALL.iter().enumerate().find_map(|(i, field)| {
            (self.labels[i].contains(position) || self.boxes[i].contains(position))
                .then_some(*field)
        })
    }

    pub fn button_contains(&self, position: Position) -> bool {
        let label_width = self.button.width.min(BUTTON_WIDTH);
        Rect::new(self.button.x, self.button.y, label_width, 1).contains(position)
    }

    /// Cursor cell for the focused field (after its last character).
    pub fn cursor(&self, fields: &ContactFields, focus: Field) -> Position {
        let index = Field::ALL
            .iter()
            .position(|f| *f == focus)
            .unwrap_or_default();
        let field_box = self.boxes[index];
        let text_width = inner_width(field_box.width);
        let (col, row) = end_position(focus.value(fields), text_width);
        Position::new(
            field_box.x + BORDER_OFFSET + PADDING + col,
            field_box.y + BORDER_OFFSET + row,
        )
    }
}

/// Widest the button label gets ("[ Send Message ]").
const BUTTON_WIDTH: u16 = 16;

/// Render props for the form.
pub struct ContactFormView<'a> {
    pub fields: &'a ContactFields,
    /// Focused field, `None` while browsing.
    pub focus: Option<Field>,
    pub phase: SubmissionPhase,
    pub hint: Option<&'a str>,
}

impl<'a> ContactFormView<'a> {
    pub fn calculate_height(fields: &ContactFields, width: u16) -> u16 {
        FormLayout::compute(Rect::new(0, 0, width, 0), fields).height
    }

    fn render_field(&self, field: Field, label: Rect, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Some(field);
        let label_style = if focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::styled(field.label(), label_style).render(label, buf);

        let border_style = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        let value = field.value(self.fields);
        let paragraph = if value.is_empty() && !focused {
            Paragraph::new(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(value.to_string())
        };
        paragraph
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl<'a> Widget for ContactFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = FormLayout::compute(area, self.fields);

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Send a Message ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(area, buf);

        for (i, field) in Field::ALL.iter().enumerate() {
            self.render_field(*field, layout.labels[i], layout.boxes[i], buf);
        }

        let button_style = if self.phase.in_flight() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(format!("[ {} ]", self.phase.button_label()), button_style)
            .render(layout.button, buf);

        if let Some(feedback) = self.phase.feedback() {
            let color = match self.phase.status() {
                SubmissionStatus::Success => Color::Green,
                _ => Color::Red,
            };
            Line::styled(feedback, Style::default().fg(color)).render(layout.feedback, buf);
        }

        if let Some(hint) = self.hint {
            Line::styled(hint, Style::default().fg(Color::Yellow)).render(layout.hint, buf);
        }
    }
}
