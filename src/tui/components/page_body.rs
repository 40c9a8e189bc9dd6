//! # PageBody Component
//!
//! The scrollable document: every section card in order, with the contact
//! form placed right after the Contact card.
//!
//! ## Layout
//!
//! Card heights depend only on width, so they are cached and recomputed on
//! resize. The form's height depends on what has been typed and is measured
//! every frame. `prefix_heights` gives each piece's bottom edge, so jump
//! targets and visibility checks are a lookup.
//!
//! ## Scroll offset
//!
//! The vertical offset is kept in rows by `ScrollViewState`. The page reports
//! it to core in CSS-pixel units via [`PageBodyState::offset_px`].

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::nav::Section;
use crate::core::scroll::PX_PER_ROW;
use crate::core::submission::SubmissionPhase;
use crate::relay::ContactFields;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::contact_form::{ContactFormView, Field, FormLayout};
use crate::tui::components::section_card::{Anchor, SectionCard, page_cards};
use crate::tui::event::TuiEvent;

/// One block of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Card(usize),
    Form,
}

/// Something clickable inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyHit {
    Field(Field),
    SendButton,
}

/// Persistent layout and scroll state for the page body.
pub struct PageBodyState {
    pub scroll_state: ScrollViewState,
    cards: Vec<SectionCard>,
    pieces: Vec<Piece>,
    heights: Vec<u16>,
    prefix_heights: Vec<u16>,
    /// Width the card heights were measured at.
    content_width: u16,
    /// Screen area of the viewport from the last render.
    pub viewport: Rect,
    /// Form layout in canvas coordinates from the last layout pass.
    form_layout: Option<FormLayout>,
}

impl PageBodyState {
    /// `year` feeds the footer's copyright line.
    pub fn new(year: i32) -> Self {
        let cards = page_cards(year);
        let mut pieces = Vec::with_capacity(cards.len() + 1);
        for (i, card) in cards.iter().enumerate() {
            pieces.push(Piece::Card(i));
            if card.anchor == Anchor::Section(Section::Contact) {
                pieces.push(Piece::Form);
            }
        }
        Self {
            scroll_state: ScrollViewState::default(),
            cards,
            pieces,
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            content_width: 0,
            viewport: Rect::default(),
            form_layout: None,
        }
    }

    /// Measure every piece at `content_width`. Card heights are reused when
    /// the width has not changed.
    pub fn relayout(&mut self, content_width: u16, fields: &ContactFields) {
        let widths_match = self.content_width == content_width && !self.heights.is_empty();
        let mut heights = Vec::with_capacity(self.pieces.len());
        for (i, piece) in self.pieces.iter().enumerate() {
            let height = match piece {
                Piece::Card(_) if widths_match => self.heights[i],
                Piece::Card(index) => self.cards[*index].calculate_height(content_width),
                Piece::Form => ContactFormView::calculate_height(fields, content_width),
            };
            heights.push(height);
        }
        self.heights = heights;
        self.content_width = content_width;
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();

        self.form_layout = self.piece_top(Piece::Form).map(|top| {
            FormLayout::compute(Rect::new(0, top, content_width, 0), fields)
        });
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn max_offset(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport.height)
    }

    fn piece_top(&self, target: Piece) -> Option<u16> {
        let index = self.pieces.iter().position(|p| *p == target)?;
        Some(if index == 0 {
            0
        } else {
            self.prefix_heights.get(index - 1).copied().unwrap_or(0)
        })
    }

    fn section_top(&self, section: Section) -> Option<u16> {
        let index = self
            .cards
            .iter()
            .position(|c| c.anchor == Anchor::Section(section))?;
        self.piece_top(Piece::Card(index))
    }

    fn set_offset_rows(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    /// Keep the offset inside the content.
    pub fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset().y;
        if current > self.max_offset() {
            self.set_offset_rows(current);
        }
    }

    /// Bring a section's card to the top of the viewport (or as close as the
    /// content allows).
    pub fn jump_to(&mut self, section: Section) {
        if let Some(top) = self.section_top(section) {
            self.set_offset_rows(top);
        }
    }

    /// Bring the form's focused field into view.
    pub fn reveal_form(&mut self) {
        let Some(layout) = &self.form_layout else {
            return;
        };
        let offset = self.scroll_state.offset().y;
        let top = layout.labels[0].y.saturating_sub(1);
        let bottom = top + layout.height;
        if top < offset || bottom > offset + self.viewport.height {
            self.set_offset_rows(top);
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    pub fn offset_rows(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Current offset in CSS-pixel units.
    pub fn offset_px(&self) -> u32 {
        u32::from(self.offset_rows()) * PX_PER_ROW
    }

    fn screen_to_canvas(&self, column: u16, row: u16) -> Option<Position> {
        let position = Position::new(column, row);
        if !self.viewport.contains(position) {
            return None;
        }
        Some(Position::new(
            column - self.viewport.x,
            row - self.viewport.y + self.offset_rows(),
        ))
    }

    fn canvas_to_screen(&self, position: Position) -> Option<Position> {
        let offset = self.offset_rows();
        if position.y < offset {
            return None;
        }
        let screen = Position::new(
            self.viewport.x + position.x,
            self.viewport.y + (position.y - offset),
        );
        self.viewport.contains(screen).then_some(screen)
    }

    /// What, if anything, was clicked at a screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<BodyHit> {
        let position = self.screen_to_canvas(column, row)?;
        let layout = self.form_layout.as_ref()?;
        if layout.button_contains(position) {
            return Some(BodyHit::SendButton);
        }
        layout.field_at(position).map(BodyHit::Field)
    }

    fn visible(&self, index: usize) -> bool {
        let offset = self.offset_rows();
        let top = if index == 0 {
            0
        } else {
            self.prefix_heights[index - 1]
        };
        let bottom = self.prefix_heights[index];
        bottom > offset && top < offset.saturating_add(self.viewport.height)
    }
}

/// Scrolling only. Jumps and clicks are driven by the event loop.
impl EventHandler for PageBodyState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollHome => self.scroll_to_top(),
            TuiEvent::ScrollEnd => self.set_offset_rows(self.max_offset()),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Transient render wrapper for the page body.
pub struct PageBody<'a> {
    state: &'a mut PageBodyState,
    fields: &'a ContactFields,
    phase: SubmissionPhase,
    /// Focused field while editing. Also places the terminal cursor.
    focus: Option<Field>,
    hint: Option<&'a str>,
}

impl<'a> PageBody<'a> {
    pub fn new(
        state: &'a mut PageBodyState,
        fields: &'a ContactFields,
        phase: SubmissionPhase,
        focus: Option<Field>,
        hint: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            fields,
            phase,
            focus,
            hint,
        }
    }
}

impl<'a> Component for PageBody<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        self.state.viewport = area;
        self.state.relayout(content_width, self.fields);
        self.state.clamp_scroll();

        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, piece) in self.state.pieces.iter().enumerate() {
            if !self.state.visible(i) {
                continue;
            }
            let top = if i == 0 {
                0
            } else {
                self.state.prefix_heights[i - 1]
            };
            let rect = Rect::new(0, top, content_width, self.state.heights[i]);
            match piece {
                Piece::Card(index) => scroll_view.render_widget(&self.state.cards[*index], rect),
                Piece::Form => scroll_view.render_widget(
                    ContactFormView {
                        fields: self.fields,
                        focus: self.focus,
                        phase: self.phase,
                        hint: self.hint,
                    },
                    rect,
                ),
            }
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        if let (Some(field), Some(layout)) = (self.focus, &self.state.form_layout) {
            let cursor = layout.cursor(self.fields, field);
            if let Some(screen) = self.state.canvas_to_screen(cursor) {
                frame.set_cursor_position(screen);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn laid_out(width: u16, height: u16) -> PageBodyState {
        let mut state = PageBodyState::new(2026);
        state.viewport = Rect::new(0, 1, width, height);
        state.relayout(width - 1, &ContactFields::default());
        state
    }

    #[test]
    fn test_form_follows_contact_card() {
        let state = PageBodyState::new(2026);
        let contact = state
            .pieces
            .iter()
            .position(|p| *p == Piece::Card(6))
            .unwrap();
        assert_eq!(state.pieces[contact + 1], Piece::Form);
        assert_eq!(state.pieces.len(), 9);
    }

    #[test]
    fn test_jump_to_section_sets_offset() {
        let mut state = laid_out(80, 20);
        state.jump_to(Section::Experience);
        let top = state.section_top(Section::Experience).unwrap();
        assert!(top > 0);
        assert_eq!(state.offset_rows(), top);
        assert_eq!(state.offset_px(), u32::from(top) * PX_PER_ROW);
    }

    #[test]
    fn test_jump_near_bottom_is_clamped() {
        let mut state = laid_out(80, 20);
        state.jump_to(Section::Contact);
        assert!(state.offset_rows() <= state.total_height() - 20);
    }

    #[test]
    fn test_scroll_events_move_and_clamp() {
        let mut state = laid_out(80, 20);
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.offset_rows(), 0);

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.offset_rows(), 1);

        state.handle_event(&TuiEvent::ScrollEnd);
        assert_eq!(state.offset_rows(), state.total_height() - 20);

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.offset_rows(), state.total_height() - 20);

        state.handle_event(&TuiEvent::ScrollHome);
        assert_eq!(state.offset_rows(), 0);
    }

    #[test]
    fn test_typing_grows_form() {
        let mut state = laid_out(80, 20);
        let before = state.total_height();
        let long = ContactFields::new("", "", &"word ".repeat(200));
        state.relayout(79, &long);
        assert!(state.total_height() > before);
    }

    #[test]
    fn test_hit_test_finds_form_fields_when_visible() {
        let mut state = laid_out(80, 40);
        assert_eq!(state.hit_test(5, 5), None);

        state.reveal_form();
        let layout = state.form_layout.clone().unwrap();
        let name_box = layout.boxes[0];
        let screen = state
            .canvas_to_screen(Position::new(name_box.x + 2, name_box.y + 1))
            .unwrap();
        assert_eq!(
            state.hit_test(screen.x, screen.y),
            Some(BodyHit::Field(Field::Name))
        );

        let button = state
            .canvas_to_screen(Position::new(layout.button.x + 1, layout.button.y))
            .unwrap();
        assert_eq!(state.hit_test(button.x, button.y), Some(BodyHit::SendButton));
    }

    #[test]
    fn test_render_shows_hero_then_scrolls() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PageBodyState::new(2026);
        let fields = ContactFields::default();

        terminal
            .draw(|f| {
                PageBody::new(&mut state, &fields, SubmissionPhase::Idle, None, None)
                    .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Swaroop Mudholkar"));

        state.jump_to(Section::Projects);
        terminal
            .draw(|f| {
                PageBody::new(&mut state, &fields, SubmissionPhase::Idle, None, None)
                    .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Projects"));
    }
}
