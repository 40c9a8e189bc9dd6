//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event flow
//!
//! ```text
//! crossterm ─► TuiEvent ─► route_event() ─► Action ─► update() ─► Effect ─► apply_effect()
//!                                                                  │
//!                      background tasks (delivery, link opening) ◄─┘
//!                                 │
//!                                 └─► mpsc ─► Action ─► update()
//! ```
//!
//! ## Scroll signal
//!
//! After every batch of events the body's offset is published on a
//! `ScrollFeed`. `TuiState` holds the page's `ScrollSubscription` for as long
//! as the page is mounted and turns each change into `Action::Scrolled`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after events or background results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use chrono::Datelike;
use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, ExternalLink, update};
use crate::core::config::ResolvedConfig;
use crate::core::nav::Section;
use crate::core::scroll::{ScrollFeed, ScrollSubscription};
use crate::core::state::Page;
use crate::relay::{ContactSubmission, FormEndpoint, FormspreeEndpoint};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BodyHit, ContactFormEditor, ContactFormState, Field, FormEvent, MenuEntry, MenuEvent,
    MenuPanelState, PageBodyState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single keys are shortcuts. Arrows scroll.
    Browse,
    /// Keys go to the focused form field. Esc returns to Browse.
    Edit,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub body: PageBodyState,
    pub form: ContactFormState,
    pub menu_panel: MenuPanelState,
    pub mode: InputMode,
    // Hit areas from the last frame
    pub nav_links: Vec<(Section, Rect)>,
    pub menu_toggle_area: Rect,
    pub scroll_top_area: Option<Rect>,
    // Scroll signal: the viewport publishes, the page observes
    scroll_feed: ScrollFeed,
    scroll_subscription: ScrollSubscription,
}

impl TuiState {
    /// `year` feeds the footer.
    pub fn new(year: i32) -> Self {
        let scroll_feed = ScrollFeed::new();
        let scroll_subscription = scroll_feed.subscribe();
        Self {
            body: PageBodyState::new(year),
            form: ContactFormState::new(),
            menu_panel: MenuPanelState::new(),
            mode: InputMode::Browse,
            nav_links: Vec::new(),
            menu_toggle_area: Rect::default(),
            scroll_top_area: None,
            scroll_feed,
            scroll_subscription,
        }
    }

    /// Publish the body's offset and collect what the subscription saw.
    fn sync_scroll(&mut self) -> Option<Action> {
        self.scroll_feed.publish(self.body.offset_px());
        self.scroll_subscription.next_offset().map(Action::Scrolled)
    }

    fn enter_edit(&mut self, field: Field) {
        self.mode = InputMode::Edit;
        self.form.focus(field);
        self.body.reveal_form();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Show
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let endpoint: Arc<dyn FormEndpoint> =
        Arc::new(FormspreeEndpoint::new(config.form_endpoint.clone()));
    info!("Contact form endpoint: {} ({})", config.form_endpoint, endpoint.name());
    let mut page = Page::from_config(endpoint, &config);
    let mut tui = TuiState::new(chrono::Local::now().year());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &page, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in route_event(&page, &mut tui, event) {
                let effect = update(&mut page, action);
                if apply_effect(effect, &page, &mut tui, &tx) {
                    break 'event_loop;
                }
            }
        }

        if let Some(action) = tui.sync_scroll() {
            update(&mut page, action);
            needs_redraw = true;
        }

        // Handle background task actions (delivery outcomes, link failures)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut page, action);
            if apply_effect(effect, &page, &mut tui, &tx) {
                break 'event_loop;
            }
        }
    }

    // Release the scroll subscription before the terminal goes away
    drop(tui);
    ratatui::restore();
    Ok(())
}

/// Translate one terminal event into actions, updating presentation state
/// along the way.
fn route_event(page: &Page, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::Resize => Vec::new(),
        // Ctrl+C always quits regardless of mode
        TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::MouseClick(column, row) => route_click(page, tui, column, row),
        // Wheel and scroll keys always go to the body unless the menu has focus
        TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollHome
        | TuiEvent::ScrollEnd => {
            tui.body.handle_event(&event);
            Vec::new()
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown if !page.menu_open() => {
            tui.body.handle_event(&event);
            Vec::new()
        }
        _ if page.menu_open() => route_menu_key(tui, event),
        _ => match tui.mode {
            InputMode::Edit => route_edit_key(page, tui, event),
            InputMode::Browse => route_browse_key(tui, event),
        },
    }
}

fn route_click(page: &Page, tui: &mut TuiState, column: u16, row: u16) -> Vec<Action> {
    let position = Position::new(column, row);

    if page.menu_open()
        && let Some(entry) = tui.menu_panel.hit_test(column, row)
    {
        return menu_choice(entry);
    }
    if tui.menu_toggle_area.contains(position) {
        return vec![Action::ToggleMenu];
    }
    if let Some((section, _)) = tui.nav_links.iter().find(|(_, r)| r.contains(position)) {
        return vec![Action::SelectLink(*section)];
    }
    if tui.scroll_top_area.is_some_and(|r| r.contains(position)) {
        return vec![Action::ScrollToTop];
    }

    match tui.body.hit_test(column, row) {
        Some(BodyHit::Field(field)) => {
            tui.enter_edit(field);
            Vec::new()
        }
        Some(BodyHit::SendButton) => {
            tui.mode = InputMode::Edit;
            tui.form.focus(Field::Message);
            route_edit_key(page, tui, TuiEvent::Submit)
        }
        None => {
            tui.mode = InputMode::Browse;
            Vec::new()
        }
    }
}

fn menu_choice(entry: MenuEntry) -> Vec<Action> {
    match entry {
        MenuEntry::Section(section) => vec![Action::SelectLink(section)],
        // Following any link closes the panel
        MenuEntry::Link(link) => vec![Action::ToggleMenu, Action::OpenLink(link)],
    }
}

fn route_menu_key(tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    if let TuiEvent::InputChar(c) = event {
        if c == 'm' {
            return vec![Action::ToggleMenu];
        }
        if let Some(section) = Section::from_digit(c) {
            return vec![Action::SelectLink(section)];
        }
    }
    match tui.menu_panel.handle_event(&event) {
        Some(MenuEvent::Choose(entry)) => menu_choice(entry),
        Some(MenuEvent::Dismiss) => vec![Action::ToggleMenu],
        None => Vec::new(),
    }
}

fn route_edit_key(page: &Page, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    // Field values belong to the page; edits go back through the reducer
    let mut fields = page.form.clone();
    let outcome = ContactFormEditor::new(&mut tui.form, &mut fields, page.in_flight())
        .handle_event(&event);
    let mut actions = Vec::new();
    if fields != page.form {
        actions.push(Action::EditForm(fields));
    }
    match outcome {
        Some(FormEvent::Submit) => actions.push(Action::Submit),
        Some(FormEvent::Leave) => tui.mode = InputMode::Browse,
        Some(FormEvent::Changed) | Some(FormEvent::Invalid) => tui.body.reveal_form(),
        None => {}
    }
    actions
}

fn route_browse_key(tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    let TuiEvent::InputChar(c) = event else {
        return Vec::new();
    };
    if let Some(section) = Section::from_digit(c) {
        return vec![Action::SelectLink(section)];
    }
    match c {
        'm' => vec![Action::ToggleMenu],
        't' => vec![Action::ScrollToTop],
        'r' => vec![Action::OpenLink(ExternalLink::Resume)],
        'g' => vec![Action::OpenLink(ExternalLink::GitHub)],
        'l' => vec![Action::OpenLink(ExternalLink::LinkedIn)],
        'e' => vec![Action::OpenLink(ExternalLink::Email)],
        'c' => {
            tui.enter_edit(tui.form.focus);
            Vec::new()
        }
        'q' => vec![Action::Quit],
        _ => Vec::new(),
    }
}

/// Carry out an effect. Returns `true` when the loop should exit.
fn apply_effect(effect: Effect, page: &Page, tui: &mut TuiState, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::JumpTo(section) => {
            debug!("Jumping to {}", section.anchor());
            tui.body.jump_to(section);
        }
        Effect::ScrollToTop => tui.body.scroll_to_top(),
        Effect::Deliver(submission) => {
            spawn_submission(page.endpoint.clone(), submission, tx.clone());
        }
        Effect::Open(target) => open_external(target, tx.clone()),
    }
    false
}

fn spawn_submission(
    endpoint: Arc<dyn FormEndpoint>,
    submission: ContactSubmission,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning contact delivery via {}", endpoint.name());
    tokio::spawn(async move {
        let result = endpoint.deliver(&submission).await;
        if tx.send(Action::SubmissionResolved(result)).is_err() {
            warn!("Failed to report submission outcome: receiver dropped");
        }
    });
}

/// Local files are opened as `file://` URLs; everything else is passed through.
/// A leading `~/` resolves against the home directory.
fn browser_target(target: &str) -> String {
    if target.contains(':') && !Path::new(target).exists() {
        return target.to_string();
    }
    match std::fs::canonicalize(expand_home(target)) {
        Ok(path) => format!("file://{}", path.display()),
        Err(_) => target.to_string(),
    }
}

fn expand_home(target: &str) -> PathBuf {
    match (target.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(target),
    }
}

fn open_external(target: String, tx: mpsc::Sender<Action>) {
    tokio::task::spawn_blocking(move || {
        let url = browser_target(&target);
        info!("Opening {}", url);
        if let Err(e) = webbrowser::open(&url) {
            warn!("Failed to open {}: {}", url, e);
            if tx
                .send(Action::LinkFailed(format!("Failed to open {target}: {e}")))
                .is_err()
            {
                warn!("Failed to report link failure: receiver dropped");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scroll::DEFAULT_SCROLL_THRESHOLD;
    use crate::test_support::{NoopEndpoint, test_page};
    use std::sync::atomic::Ordering;

    fn tui() -> TuiState {
        TuiState::new(2026)
    }

    fn keys(page: &Page, tui: &mut TuiState, text: &str) -> Vec<Action> {
        text.chars()
            .flat_map(|c| route_event(page, tui, TuiEvent::InputChar(c)))
            .collect()
    }

    #[test]
    fn test_browse_shortcuts() {
        let page = test_page();
        let mut tui = tui();
        let actions = keys(&page, &mut tui, "m3trglq");
        assert!(matches!(actions[0], Action::ToggleMenu));
        assert!(matches!(actions[1], Action::SelectLink(Section::Skills)));
        assert!(matches!(actions[2], Action::ScrollToTop));
        assert!(matches!(actions[3], Action::OpenLink(ExternalLink::Resume)));
        assert!(matches!(actions[4], Action::OpenLink(ExternalLink::GitHub)));
        assert!(matches!(actions[5], Action::OpenLink(ExternalLink::LinkedIn)));
        assert!(matches!(actions[6], Action::Quit));
    }

    #[test]
    fn test_force_quit_from_edit_mode() {
        let page = test_page();
        let mut tui = tui();
        tui.mode = InputMode::Edit;
        let actions = route_event(&page, &mut tui, TuiEvent::ForceQuit);
        assert!(matches!(actions[..], [Action::Quit]));
    }

    #[test]
    fn test_c_enters_edit_and_typing_edits_form() {
        let mut page = test_page();
        let mut tui = tui();
        assert!(keys(&page, &mut tui, "c").is_empty());
        assert_eq!(tui.mode, InputMode::Edit);

        // 'q' is text now, not quit
        for action in keys(&page, &mut tui, "q") {
            update(&mut page, action);
        }
        assert_eq!(page.form.name, "q");
    }

    #[test]
    fn test_escape_leaves_edit_mode() {
        let page = test_page();
        let mut tui = tui();
        tui.mode = InputMode::Edit;
        route_event(&page, &mut tui, TuiEvent::Escape);
        assert_eq!(tui.mode, InputMode::Browse);
    }

    #[test]
    fn test_valid_form_submits_once() {
        let mut page = test_page();
        page.form = crate::relay::ContactFields::new("Ada", "ada@example.com", "Hi");
        let mut tui = tui();
        tui.enter_edit(Field::Message);

        let actions = route_event(&page, &mut tui, TuiEvent::Submit);
        assert!(matches!(actions[..], [Action::Submit]));
        let effect = update(&mut page, Action::Submit);
        assert!(matches!(effect, Effect::Deliver(_)));

        // A second Enter while in flight produces nothing
        let actions = route_event(&page, &mut tui, TuiEvent::Submit);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_menu_keys_when_open() {
        let mut page = test_page();
        page.menu.toggle();
        let mut tui = tui();

        // Arrows move the highlight instead of scrolling
        route_event(&page, &mut tui, TuiEvent::ScrollDown);
        assert_eq!(tui.body.offset_rows(), 0);
        let actions = route_event(&page, &mut tui, TuiEvent::Submit);
        assert!(matches!(actions[..], [Action::SelectLink(Section::Experience)]));

        let actions = route_event(&page, &mut tui, TuiEvent::Escape);
        assert!(matches!(actions[..], [Action::ToggleMenu]));
    }

    #[test]
    fn test_menu_link_closes_and_opens() {
        let actions = menu_choice(MenuEntry::Link(ExternalLink::GitHub));
        assert!(matches!(
            actions[..],
            [Action::ToggleMenu, Action::OpenLink(ExternalLink::GitHub)]
        ));
    }

    #[test]
    fn test_click_on_toggle_and_nav_links() {
        let page = test_page();
        let mut tui = tui();
        tui.menu_toggle_area = Rect::new(70, 0, 10, 1);
        tui.nav_links = vec![(Section::Projects, Rect::new(30, 0, 10, 1))];

        let actions = route_event(&page, &mut tui, TuiEvent::MouseClick(72, 0));
        assert!(matches!(actions[..], [Action::ToggleMenu]));

        let actions = route_event(&page, &mut tui, TuiEvent::MouseClick(31, 0));
        assert!(matches!(actions[..], [Action::SelectLink(Section::Projects)]));
    }

    #[test]
    fn test_click_on_scroll_top() {
        let page = test_page();
        let mut tui = tui();
        tui.scroll_top_area = Some(Rect::new(70, 20, 7, 1));
        let actions = route_event(&page, &mut tui, TuiEvent::MouseClick(72, 20));
        assert!(matches!(actions[..], [Action::ScrollToTop]));
    }

    #[test]
    fn test_scroll_signal_reports_changes_once() {
        let mut tui = tui();
        // Initial offset 0 equals the channel's initial value
        assert!(tui.sync_scroll().is_none());

        tui.body.viewport = Rect::new(0, 1, 80, 20);
        tui.body.relayout(79, &crate::relay::ContactFields::default());
        tui.body.jump_to(Section::Experience);
        let expected = tui.body.offset_px();
        assert!(matches!(tui.sync_scroll(), Some(Action::Scrolled(px)) if px == expected));
        assert!(tui.sync_scroll().is_none());
    }

    #[test]
    fn test_dropping_tui_releases_scroll_observer() {
        let tui = tui();
        assert_eq!(tui.scroll_feed.observer_count(), 1);
        let TuiState {
            scroll_feed,
            scroll_subscription,
            ..
        } = tui;
        drop(scroll_subscription);
        assert_eq!(scroll_feed.observer_count(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_deliver_effect_reports_back_over_channel() {
        let endpoint = Arc::new(NoopEndpoint::default());
        let page = Page::new(endpoint.clone(), DEFAULT_SCROLL_THRESHOLD);
        let mut tui = tui();
        let (tx, rx) = mpsc::channel();

        let submission =
            ContactSubmission::from(crate::relay::ContactFields::new("Ada", "ada@example.com", "Hi"));
        assert!(!apply_effect(Effect::Deliver(submission), &page, &mut tui, &tx));

        let action = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("delivery outcome should arrive");
        assert!(matches!(action, Action::SubmissionResolved(Ok(()))));
        assert_eq!(endpoint.deliveries.load(Ordering::SeqCst), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_expand_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home("~/cv/resume.pdf"), home.join("cv/resume.pdf"));
        assert_eq!(expand_home("resume.pdf"), PathBuf::from("resume.pdf"));
        assert_eq!(expand_home("/tmp/~/x.pdf"), PathBuf::from("/tmp/~/x.pdf"));
    }

    #[test]
    fn test_browser_target_resolves_home_relative_file() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let name = format!(".folio-resume-{}.pdf", std::process::id());
        let file = home.join(&name);
        std::fs::write(&file, b"%PDF").unwrap();

        let target = browser_target(&format!("~/{name}"));
        let expected = format!("file://{}", std::fs::canonicalize(&file).unwrap().display());
        std::fs::remove_file(&file).unwrap();
        assert_eq!(target, expected);
    }

    #[test]
    fn test_browser_target_missing_home_file_passes_through() {
        assert_eq!(
            browser_target("~/folio-no-such-dir/resume.pdf"),
            "~/folio-no-such-dir/resume.pdf"
        );
    }

    #[test]
    fn test_browser_target_passes_urls_through() {
        assert_eq!(
            browser_target("https://github.com/someone"),
            "https://github.com/someone"
        );
        assert_eq!(browser_target("mailto:a@b.c"), "mailto:a@b.c");
    }
}
