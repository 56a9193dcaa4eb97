// src/status/event.rs
//! Status events accepted by the display engine.

use std::fmt;
use std::time::Instant;

/// Category of a status report. Only affects the glyph drawn in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Thinking,
    Processing,
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub const ALL: [Self; 5] = [
        Self::Thinking,
        Self::Processing,
        Self::Success,
        Self::Error,
        Self::Info,
    ];

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Thinking => "🤔",
            Self::Processing => "⚙️",
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Info => "ℹ️",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Thinking => "thinking",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        };
        f.write_str(name)
    }
}

/// One accepted status report.
///
/// The timestamp is taken by the engine when the event enters the history;
/// it is kept for diagnostics and never used for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEvent {
    kind: StatusKind,
    message: String,
    timestamp: Instant,
}

impl StatusEvent {
    pub(crate) fn accept(kind: StatusKind, message: String) -> Self {
        Self {
            kind,
            message,
            timestamp: Instant::now(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    /// The text drawn on the status line: `"<glyph> <message>"`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} {}", self.kind.glyph(), self.message)
    }
}
