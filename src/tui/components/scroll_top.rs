//! # ScrollTop Component
//!
//! The floating "back to top" control, drawn over the bottom-right corner of
//! the page body once the page has scrolled past the threshold.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Clear;

use crate::tui::component::Component;

const LABEL: &str = " ↑ Top ";
const LABEL_WIDTH: u16 = 7;

pub struct ScrollTop;

impl ScrollTop {
    /// Where the control sits inside `body`: one column in from the
    /// scrollbar, one row up from the bottom edge.
    pub fn area(body: Rect) -> Rect {
        let width = LABEL_WIDTH.min(body.width);
        let x = body.right().saturating_sub(width + 2).max(body.x);
        let y = body.bottom().saturating_sub(2).max(body.y);
        Rect::new(x, y, width, 1)
    }
}

impl Component for ScrollTop {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = Self::area(area);
        frame.render_widget(Clear, button);
        frame.render_widget(
            Span::styled(
                LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            button,
        );
    }
}
