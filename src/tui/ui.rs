use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::profile::PROFILE;
use crate::core::state::Page;
use crate::tui::component::Component;
use crate::tui::components::{MenuPanel, NavBar, PageBody, ScrollTop};
use crate::tui::{InputMode, TuiState};

const BROWSE_HINTS: &str = "m Menu  1-6 Jump  r Resume  g/l Social  e Email  c Write  q Quit";
const EDIT_HINTS: &str = "Tab Next field  Enter Next/Send  Ctrl+J Newline  Esc Done";

pub fn draw_ui(frame: &mut Frame, page: &Page, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [nav_area, body_area, status_area] = layout.areas(frame.area());

    // Body first so overlays draw on top of it
    let focus = match tui.mode {
        InputMode::Edit => Some(tui.form.focus),
        InputMode::Browse => None,
    };
    PageBody::new(
        &mut tui.body,
        &page.form,
        page.submission,
        focus,
        tui.form.hint,
    )
    .render(frame, body_area);

    tui.scroll_top_area = if page.show_scroll_top() {
        ScrollTop.render(frame, body_area);
        Some(ScrollTop::area(body_area))
    } else {
        None
    };

    let mut nav = NavBar::new(PROFILE.name, page.menu_open());
    nav.render(frame, nav_area);
    tui.nav_links = nav.link_areas;
    tui.menu_toggle_area = nav.toggle_area;

    if page.menu_open() {
        MenuPanel::new(&mut tui.menu_panel).render(frame, body_area);
    } else {
        tui.menu_panel.entry_areas.clear();
    }

    draw_status_line(frame, status_area, page, tui.mode);
}

fn draw_status_line(frame: &mut Frame, area: Rect, page: &Page, mode: InputMode) {
    let line = if let Some(notice) = &page.notice {
        Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let hints = match mode {
            InputMode::Browse => BROWSE_HINTS,
            InputMode::Edit => EDIT_HINTS,
        };
        Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_page;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(page: &Page, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, page, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_initial_frame() {
        let page = test_page();
        let mut tui = TuiState::new(2026);
        let text = draw(&page, &mut tui, 80, 24);
        assert!(text.contains("Menu"));
        assert!(text.contains("q Quit"));
        assert!(!text.contains("Navigate"));
        assert!(tui.scroll_top_area.is_none());
        assert!(tui.menu_toggle_area.width > 0);
    }

    #[test]
    fn test_menu_overlay_when_open() {
        let mut page = test_page();
        page.menu.toggle();
        let mut tui = TuiState::new(2026);
        let text = draw(&page, &mut tui, 80, 24);
        assert!(text.contains("Navigate"));
        assert!(text.contains("Close"));
        assert_eq!(tui.menu_panel.entry_areas.len(), 8);
    }

    #[test]
    fn test_scroll_top_shown_past_threshold() {
        let mut page = test_page();
        page.scroll.observe(401);
        let mut tui = TuiState::new(2026);
        let text = draw(&page, &mut tui, 80, 24);
        assert!(text.contains("Top"));
        assert!(tui.scroll_top_area.is_some());
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut page = test_page();
        page.notice = Some("No resume configured".to_string());
        let mut tui = TuiState::new(2026);
        let text = draw(&page, &mut tui, 80, 24);
        assert!(text.contains("No resume configured"));
        assert!(!text.contains("q Quit"));
    }

    #[test]
    fn test_edit_mode_hints() {
        let page = test_page();
        let mut tui = TuiState::new(2026);
        tui.mode = InputMode::Edit;
        let text = draw(&page, &mut tui, 100, 24);
        assert!(text.contains("Esc Done"));
    }
}
