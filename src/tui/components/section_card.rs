//! # SectionCard Component
//!
//! One bordered block of the page (hero, a section, or the footer), plus the
//! builders that turn [`PROFILE`] into cards.
//!
//! Cards are transient: `PageBody` rebuilds nothing per frame, it keeps the
//! card list and only recomputes heights when the width changes.
//!
//! # Height Calculation
//!
//! [`SectionCard::calculate_height`] predicts the rendered height with
//! `textwrap`, using options that match Ratatui's `Paragraph` wrapping, so the
//! page can lay out the scroll canvas (and jump targets) without rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::nav::Section;
use crate::core::profile::{Entry, PROFILE};

/// Border (2) + padding (2) consumed horizontally.
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;

/// Where a card sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Hero,
    Section(Section),
    Footer,
}

pub struct SectionCard {
    pub anchor: Anchor,
    pub title: Option<String>,
    pub lines: Vec<Line<'static>>,
}

impl SectionCard {
    fn new(anchor: Anchor, title: Option<&str>, lines: Vec<Line<'static>>) -> Self {
        Self {
            anchor,
            title: title.map(|t| format!(" {t} ")),
            lines,
        }
    }

    /// Height of the card at `width`, borders included.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return VERTICAL_OVERHEAD + 1;
        }

        let rows: usize = self
            .lines
            .iter()
            .map(|line| wrapped_rows(&line_text(line), content_width))
            .sum();
        (rows as u16).max(1) + VERTICAL_OVERHEAD
    }
}

impl Widget for &SectionCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        if let Some(title) = &self.title {
            block = block.title(Span::styled(
                title.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(self.lines.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Rows a single logical line occupies once wrapped.
pub(super) fn wrapped_rows(text: &str, width: u16) -> usize {
    if text.is_empty() || width == 0 {
        return 1;
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text, options).len().max(1)
}

// ============================================================================
// Card builders
// ============================================================================

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn accent(text: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
}

fn bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(Color::Green)),
        Span::raw(text.to_string()),
    ])
}

fn key_hint(key: &str, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{key}]"), Style::default().fg(Color::Green)),
        Span::raw(format!(" {label}   ")),
    ]
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10} "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

fn entries(items: &[Entry]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, entry) in items.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(muted(entry.time));
        lines.push(heading(entry.title));
        lines.push(accent(entry.subtitle, Color::Cyan));
        if let Some(description) = entry.description {
            lines.push(Line::raw(description));
        }
    }
    lines
}

fn hero() -> SectionCard {
    let p = &PROFILE;
    let mut cta = key_hint("r", "Download Resume");
    cta.extend(key_hint("4", "View Projects"));

    let lines = vec![
        accent(&format!("● {}", p.tagline), Color::Green),
        Line::default(),
        Line::from(Span::styled(
            p.headline.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::raw(p.pitch),
        Line::default(),
        Line::from(cta),
        Line::default(),
        labelled("Focus", p.focus),
        labelled("Currently", p.currently),
        Line::default(),
        heading(p.name),
        muted(p.photo_caption[0]),
        accent(p.photo_caption[1], Color::Cyan),
    ];
    SectionCard::new(Anchor::Hero, Some(p.name), lines)
}

fn about() -> SectionCard {
    let mut lines = Vec::new();
    for (i, paragraph) in PROFILE.about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::raw(*paragraph));
    }
    SectionCard::new(Anchor::Section(Section::About), Some("About Me"), lines)
}

fn experience() -> SectionCard {
    SectionCard::new(
        Anchor::Section(Section::Experience),
        Some("Experience & Achievements"),
        entries(PROFILE.experience),
    )
}

fn skills() -> SectionCard {
    let p = &PROFILE;
    let mut lines = vec![
        heading("Core Technical Skills"),
        muted("Things I use most often in projects"),
    ];
    lines.extend(p.core_skills.iter().map(|s| bullet(s)));

    lines.push(Line::default());
    lines.push(heading("Tools & Electronics"));
    lines.push(muted("Software I've used for analysis and circuit design"));
    let chips: Vec<Span<'static>> = p
        .tools
        .iter()
        .flat_map(|tool| {
            [
                Span::styled(format!("[{tool}]"), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(chips));

    lines.push(Line::default());
    lines.push(heading("Web & Areas I'm Exploring"));
    lines.extend(p.exploring.iter().map(|s| bullet(s)));

    SectionCard::new(Anchor::Section(Section::Skills), Some("Skills"), lines)
}

fn projects() -> SectionCard {
    let mut lines = Vec::new();
    for (i, project) in PROFILE.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(heading(project.title));
        lines.push(accent(project.stack, Color::Yellow));
        lines.push(Line::raw(project.description));
    }
    SectionCard::new(Anchor::Section(Section::Projects), Some("Projects"), lines)
}

fn education() -> SectionCard {
    SectionCard::new(
        Anchor::Section(Section::Education),
        Some("Education"),
        entries(PROFILE.education),
    )
}

fn contact() -> SectionCard {
    let p = &PROFILE;
    let mut links = key_hint("e", "Email");
    links.extend(key_hint("g", "GitHub"));
    links.extend(key_hint("l", "LinkedIn"));

    let lines = vec![
        Line::raw(p.contact_intro),
        Line::default(),
        labelled("Email:", p.email),
        labelled("Phone:", p.phone),
        labelled("Location:", p.location),
        Line::default(),
        Line::from(links),
        muted("Press [c] to write a message below."),
    ];
    SectionCard::new(Anchor::Section(Section::Contact), Some("Contact"), lines)
}

fn footer(year: i32) -> SectionCard {
    let lines = vec![
        muted(&PROFILE.footer(year)),
        muted("Email · GitHub · LinkedIn"),
    ];
    SectionCard::new(Anchor::Footer, None, lines)
}

/// Every card of the page in document order. The contact form is placed
/// right after the `Contact` card by `PageBody`.
pub fn page_cards(year: i32) -> Vec<SectionCard> {
    vec![
        hero(),
        about(),
        experience(),
        skills(),
        projects(),
        education(),
        contact(),
        footer(year),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cards_in_document_order() {
        let anchors: Vec<Anchor> = page_cards(2026).iter().map(|c| c.anchor).collect();
        let mut expected = vec![Anchor::Hero];
        expected.extend(Section::ALL.iter().map(|s| Anchor::Section(*s)));
        expected.push(Anchor::Footer);
        assert_eq!(anchors, expected);
    }

    #[test]
    fn test_height_includes_borders() {
        let card = SectionCard::new(Anchor::Footer, None, vec![Line::raw("Single line")]);
        assert_eq!(card.calculate_height(80), 3);
    }

    #[test]
    fn test_height_grows_when_narrow() {
        let card = about();
        assert!(card.calculate_height(40) > card.calculate_height(120));
    }

    #[test]
    fn test_blank_lines_count_as_rows() {
        let card = SectionCard::new(
            Anchor::Footer,
            None,
            vec![Line::raw("a"), Line::default(), Line::raw("b")],
        );
        assert_eq!(card.calculate_height(80), 5);
    }

    #[test]
    fn test_degenerate_width() {
        let card = about();
        assert_eq!(card.calculate_height(3), 3);
    }

    #[test]
    fn test_render_shows_title_and_content() {
        let card = footer(2026);
        let backend = TestBackend::new(60, card.calculate_height(60));
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(&card, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Portfolio by Swaroop Mudholkar"));
    }
}
