// tests/unit_render.rs
use chatline_core::status::render::{self, CLEAR_WIDTH, FRAMES};
use chatline_core::status::{StatusEvent, StatusKind};

fn blanks(n: usize) -> String {
    " ".repeat(n)
}

#[test]
fn test_render_pads_to_clear_width() {
    let out = String::from_utf8(render::render(0, "hello")).unwrap();
    assert_eq!(out, format!("\r{}\rhello", blanks(CLEAR_WIDTH)));
}

#[test]
fn test_render_pads_past_wide_previous_line() {
    let out = String::from_utf8(render::render(95, "hi")).unwrap();
    assert_eq!(out, format!("\r{}\rhi", blanks(95)));
}

#[test]
fn test_render_has_no_line_break() {
    let out = render::render(10, "status");
    assert!(!out.contains(&b'\n'));
}

#[test]
fn test_render_final_appends_single_newline() {
    let out = String::from_utf8(render::render_final(0, "done")).unwrap();
    assert_eq!(out, format!("\r{}\rdone\n", blanks(CLEAR_WIDTH)));
    assert_eq!(out.matches('\n').count(), 1);
}

#[test]
fn test_spinner_line_cycles_ten_frames() {
    assert_eq!(FRAMES.len(), 10);
    assert_eq!(render::spinner_line(0, "Working"), "⠋ Working");
    assert_eq!(render::spinner_line(9, "Working"), "⠏ Working");
    assert_eq!(render::spinner_line(10, "Working"), "⠋ Working");
}

#[test]
fn test_width_counts_columns_not_bytes() {
    assert_eq!(render::width("abc"), 3);
    assert_eq!(render::width("⠋ ab"), 4);
    assert!("✅".len() > render::width("✅"));
}

#[test]
fn test_every_kind_has_distinct_glyph() {
    let mut glyphs: Vec<&str> = StatusKind::ALL.iter().map(|k| k.glyph()).collect();
    glyphs.sort_unstable();
    glyphs.dedup();
    assert_eq!(glyphs.len(), StatusKind::ALL.len());
}

#[test]
fn test_kind_names() {
    assert_eq!(StatusKind::Thinking.to_string(), "thinking");
    assert_eq!(StatusKind::Success.to_string(), "success");
    assert_eq!(StatusKind::Success.glyph(), "✅");
    assert_eq!(StatusKind::Error.glyph(), "❌");
}

#[test]
fn test_event_line_format() {
    let display = chatline_core::status::StatusDisplay::new(
        chatline_core::status::MemorySink::new(),
        chatline_core::status::DisplayOptions::default(),
    );
    display.update(StatusKind::Info, "Generating response...").unwrap();
    let history: Vec<StatusEvent> = display.history();
    assert_eq!(history[0].line(), "ℹ️ Generating response...");
}
