// src/status/render.rs
//! Byte-level rendering of the status line.
//!
//! Every write returns the cursor to column zero, blanks out whatever the
//! previous write left behind, returns again and draws the new content. Nothing
//! here touches a terminal; callers write the returned bytes themselves.

use unicode_width::UnicodeWidthStr;

/// Minimum number of columns blanked before each redraw.
pub const CLEAR_WIDTH: usize = 80;

/// Braille animation cycle used by the spinner.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Bytes that replace the current line with `content`, leaving the cursor on it.
#[must_use]
pub fn render(previous_width: usize, content: &str) -> Vec<u8> {
    let blank = previous_width.max(CLEAR_WIDTH);
    let mut out = Vec::with_capacity(blank + content.len() + 3);
    out.push(b'\r');
    out.resize(blank + 1, b' ');
    out.push(b'\r');
    out.extend_from_slice(content.as_bytes());
    out
}

/// Like [`render`], then seals the line with a line break.
#[must_use]
pub fn render_final(previous_width: usize, content: &str) -> Vec<u8> {
    let mut out = render(previous_width, content);
    out.push(b'\n');
    out
}

/// Display width of `content` in terminal columns.
#[must_use]
pub fn width(content: &str) -> usize {
    UnicodeWidthStr::width(content)
}

#[must_use]
pub fn frame(index: usize) -> &'static str {
    FRAMES.get(index % FRAMES.len()).copied().unwrap_or("⠋")
}

/// The spinner line for a given tick: `"<glyph> <message>"`.
#[must_use]
pub fn spinner_line(index: usize, message: &str) -> String {
    format!("{} {message}", frame(index))
}
