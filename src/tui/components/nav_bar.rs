//! # NavBar Component
//!
//! Fixed top row: owner's name, the inline section links (wide terminals
//! only), and the menu toggle on the right.
//!
//! Below [`DESKTOP_MIN_WIDTH`] columns the inline links are hidden and the
//! collapsible menu is the only way to reach them, the same way the page
//! collapses its navbar on narrow screens.
//!
//! The component records where it drew each clickable item so the event
//! loop can hit-test mouse clicks against the last frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::nav::Section;
use crate::tui::component::Component;

/// Narrowest terminal that shows the inline links.
pub const DESKTOP_MIN_WIDTH: u16 = 104;

const LINK_GAP: u16 = 2;

pub struct NavBar<'a> {
    pub name: &'a str,
    pub menu_open: bool,
    /// Screen areas of the inline links from the last render.
    pub link_areas: Vec<(Section, Rect)>,
    /// Screen area of the menu toggle from the last render.
    pub toggle_area: Rect,
}

impl<'a> NavBar<'a> {
    pub fn new(name: &'a str, menu_open: bool) -> Self {
        Self {
            name,
            menu_open,
            link_areas: Vec::new(),
            toggle_area: Rect::default(),
        }
    }

    fn toggle_label(&self) -> &'static str {
        if self.menu_open { " ✕ Close " } else { " ☰ Menu " }
    }
}

impl<'a> Component for NavBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.link_areas.clear();

        let brand = format!(" {} ", self.name);
        let mut x = area.x + brand.width() as u16;
        let mut spans = vec![Span::styled(
            brand,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];

        if area.width >= DESKTOP_MIN_WIDTH {
            for (i, section) in Section::ALL.iter().enumerate() {
                spans.push(Span::raw(" ".repeat(LINK_GAP as usize)));
                x += LINK_GAP;

                let label = format!("{} {}", i + 1, section.label());
                let width = label.width() as u16;
                self.link_areas.push((*section, Rect::new(x, area.y, width, 1)));
                spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
                x += width;
            }
        }

        frame.render_widget(Line::from(spans), area);

        let toggle = self.toggle_label();
        let width = (toggle.width() as u16).min(area.width);
        self.toggle_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
        let toggle_style = if self.menu_open {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Green)
        };
        frame.render_widget(Span::styled(toggle, toggle_style), self.toggle_area);
    }
}
