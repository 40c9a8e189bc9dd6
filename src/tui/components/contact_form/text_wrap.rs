//! Wrapping helpers and box dimensions shared by the form fields.
//!
//! Stateless: nothing here knows about focus or submission state.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by a bordered box.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders.
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from a box edge to its content.
pub(super) const BORDER_OFFSET: u16 = 1;
/// Padding between the left border and the text.
pub(super) const PADDING: u16 = 1;

/// Textwrap options matching `Paragraph` with `Wrap { trim: false }`.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Content width inside a bordered, padded box. 0 if too narrow.
pub(super) fn inner_width(box_width: u16) -> u16 {
    box_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped line count, counting a trailing newline as its own empty line.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Column and row just past the last character of `text` once wrapped.
///
/// Editing is append-only, so this is where the cursor always sits.
pub(super) fn end_position(text: &str, width: u16) -> (u16, u16) {
    if width == 0 || text.is_empty() {
        return (0, 0);
    }

    let rows = wrap_line_count(text, width);
    if text.ends_with('\n') {
        return (0, rows - 1);
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let last_width = lines.last().map(|l| l.width() as u16).unwrap_or(0);
    (last_width.min(width.saturating_sub(1)), rows - 1)
}
