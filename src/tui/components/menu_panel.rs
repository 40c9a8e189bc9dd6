//! # Menu Panel Component
//!
//! The collapsible navigation panel, drawn as an overlay under the menu
//! toggle while `Page::menu_open()` is true. Lists the six sections followed
//! by the social links.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuPanelState` lives in `TuiState` (highlighted row)
//! - `MenuPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::core::action::ExternalLink;
use crate::core::nav::Section;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PANEL_WIDTH: u16 = 24;

/// One row of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Section(Section),
    Link(ExternalLink),
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 8] = [
        MenuEntry::Section(Section::About),
        MenuEntry::Section(Section::Experience),
        MenuEntry::Section(Section::Skills),
        MenuEntry::Section(Section::Projects),
        MenuEntry::Section(Section::Education),
        MenuEntry::Section(Section::Contact),
        MenuEntry::Link(ExternalLink::GitHub),
        MenuEntry::Link(ExternalLink::LinkedIn),
    ];

    fn label(self) -> String {
        match self {
            MenuEntry::Section(section) => section.label().to_string(),
            MenuEntry::Link(ExternalLink::GitHub) => "GitHub ↗".to_string(),
            MenuEntry::Link(ExternalLink::LinkedIn) => "LinkedIn ↗".to_string(),
            MenuEntry::Link(ExternalLink::Resume) => "Resume ↗".to_string(),
            MenuEntry::Link(ExternalLink::Email) => "Email ↗".to_string(),
        }
    }
}

/// Events emitted by the menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Choose(MenuEntry),
    Dismiss,
}

/// Persistent state for the menu panel.
pub struct MenuPanelState {
    pub list_state: ListState,
    /// Screen rows of each entry from the last render.
    pub entry_areas: Vec<(MenuEntry, Rect)>,
}

impl Default for MenuPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuPanelState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            entry_areas: Vec::new(),
        }
    }

    pub fn selected(&self) -> MenuEntry {
        let index = self.list_state.selected().unwrap_or(0);
        MenuEntry::ALL[index.min(MenuEntry::ALL.len() - 1)]
    }

    /// Entry under a screen position, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<MenuEntry> {
        self.entry_areas
            .iter()
            .find(|(_, rect)| {
                row == rect.y && column >= rect.x && column < rect.x + rect.width
            })
            .map(|(entry, _)| *entry)
    }
}

impl EventHandler for MenuPanelState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let last = MenuEntry::ALL.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        match event {
            TuiEvent::Escape => Some(MenuEvent::Dismiss),
            TuiEvent::ScrollUp | TuiEvent::PrevField => {
                self.list_state.select(Some(current.saturating_sub(1)));
                None
            }
            TuiEvent::ScrollDown | TuiEvent::NextField => {
                self.list_state.select(Some((current + 1).min(last)));
                None
            }
            TuiEvent::Submit => Some(MenuEvent::Choose(self.selected())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu panel overlay.
pub struct MenuPanel<'a> {
    state: &'a mut MenuPanelState,
}

impl<'a> MenuPanel<'a> {
    pub fn new(state: &'a mut MenuPanelState) -> Self {
        Self { state }
    }

    /// Overlay rectangle: anchored to the top-right corner of `area`.
    pub fn overlay_area(area: Rect) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        let height = (MenuEntry::ALL.len() as u16 + 2).min(area.height);
        Rect::new(area.right().saturating_sub(width), area.y, width, height)
    }
}

impl<'a> Component for MenuPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::overlay_area(area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Navigate ")
            .title_bottom(Line::from(" Enter Go  Esc Close ").centered());

        let inner = block.inner(overlay);
        self.state.entry_areas = MenuEntry::ALL
            .iter()
            .enumerate()
            .take(inner.height as usize)
            .map(|(i, entry)| (*entry, Rect::new(inner.x, inner.y + i as u16, inner.width, 1)))
            .collect();

        let items: Vec<ListItem> = MenuEntry::ALL
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = match entry {
                    MenuEntry::Section(_) => format!("{} {}", i + 1, entry.label()),
                    MenuEntry::Link(_) => format!("  {}", entry.label()),
                };
                let style = match entry {
                    MenuEntry::Section(_) => Style::default().fg(Color::Gray),
                    MenuEntry::Link(_) => Style::default().fg(Color::Cyan),
                };
                ListItem::new(text).style(style)
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_starts_on_first_section() {
        let state = MenuPanelState::new();
        assert_eq!(state.selected(), MenuEntry::Section(Section::About));
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut state = MenuPanelState::new();
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.selected(), MenuEntry::Section(Section::About));

        for _ in 0..20 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.selected(), MenuEntry::Link(ExternalLink::LinkedIn));
    }

    #[test]
    fn test_enter_chooses_highlighted_entry() {
        let mut state = MenuPanelState::new();
        state.handle_event(&TuiEvent::ScrollDown);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::Choose(MenuEntry::Section(Section::Skills)))
        );
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = MenuPanelState::new();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(MenuEvent::Dismiss));
    }

    #[test]
    fn test_render_lists_entries_and_records_hit_areas() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MenuPanelState::new();

        terminal
            .draw(|f| MenuPanel::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Navigate"));
        assert!(text.contains("5 Education"));
        assert!(text.contains("GitHub"));

        assert_eq!(state.entry_areas.len(), MenuEntry::ALL.len());
        let (entry, rect) = state.entry_areas[3];
        assert_eq!(entry, MenuEntry::Section(Section::Projects));
        assert_eq!(state.hit_test(rect.x + 1, rect.y), Some(entry));
        assert_eq!(state.hit_test(0, rect.y), None);
    }
}
