// src/status/state.rs
//! State guarded by the write gate: the sink, the history and the cursor.

use std::io::{self, Write};

use crossterm::{cursor, queue};

use super::event::{StatusEvent, StatusKind};
use super::render;

pub(crate) struct LineState {
    sink: Box<dyn Write + Send>,
    history: Vec<StatusEvent>,
    line_width: usize,
    hide_cursor: bool,
    cursor_hidden: bool,
    /// First write failure seen on the spinner thread, surfaced by the next caller.
    fault: Option<io::Error>,
}

impl LineState {
    pub(crate) fn new(sink: Box<dyn Write + Send>, hide_cursor: bool) -> Self {
        Self {
            sink,
            history: Vec::new(),
            line_width: 0,
            hide_cursor,
            cursor_hidden: false,
            fault: None,
        }
    }

    pub(crate) fn record(&mut self, kind: StatusKind, message: String) -> StatusEvent {
        let event = StatusEvent::accept(kind, message);
        self.history.push(event.clone());
        event
    }

    pub(crate) fn history(&self) -> &[StatusEvent] {
        &self.history
    }

    /// Replaces the line contents, leaving the cursor on the line.
    pub(crate) fn draw(&mut self, content: &str) -> io::Result<()> {
        let bytes = render::render(self.line_width, content);
        self.write_flush(&bytes)?;
        self.line_width = render::width(content);
        Ok(())
    }

    /// Replaces the line contents and moves to a fresh line.
    pub(crate) fn seal(&mut self, content: &str) -> io::Result<()> {
        let bytes = render::render_final(self.line_width, content);
        self.write_flush(&bytes)?;
        self.line_width = 0;
        Ok(())
    }

    /// Raw passthrough for text that is not a status line.
    pub(crate) fn emit(&mut self, text: &str) -> io::Result<()> {
        self.write_flush(text.as_bytes())?;
        let tail = text.rsplit('\n').next().unwrap_or_default();
        self.line_width = if text.contains('\n') {
            render::width(tail)
        } else {
            self.line_width + render::width(tail)
        };
        Ok(())
    }

    /// Hides the cursor before a spinner starts, if configured to.
    pub(crate) fn conceal_cursor(&mut self) -> io::Result<()> {
        if self.hide_cursor && !self.cursor_hidden {
            queue!(self.sink, cursor::Hide)?;
            self.sink.flush()?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    /// Shows the cursor again if a spinner hid it.
    pub(crate) fn reveal_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            queue!(self.sink, cursor::Show)?;
            self.sink.flush()?;
            self.cursor_hidden = false;
        }
        Ok(())
    }

    /// Called from the spinner thread when a frame could not be written.
    pub(crate) fn record_fault(&mut self, error: io::Error) {
        if self.fault.is_none() {
            self.fault = Some(error);
        }
    }

    pub(crate) fn take_fault(&mut self) -> Option<io::Error> {
        self.fault.take()
    }

    fn write_flush(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)?;
        self.sink.flush()
    }
}

impl Drop for LineState {
    fn drop(&mut self) {
        let _ = self.reveal_cursor();
    }
}
