// src/status/sink.rs
//! In-memory terminal sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A cloneable writer that keeps every byte written to it.
///
/// Hand one clone to [`StatusDisplay`](super::StatusDisplay) and keep another to
/// inspect what was drawn.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// What a terminal would show on the current (unsealed) line.
    #[must_use]
    pub fn current_line(&self) -> String {
        let contents = self.contents();
        let tail = contents.rsplit('\n').next().unwrap_or_default();
        tail.rsplit('\r').next().unwrap_or_default().to_string()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
