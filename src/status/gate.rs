// src/status/gate.rs
//! The write gate: the only path to the shared status line.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError, TryLockError};

use super::state::LineState;

/// Cloneable handle to the mutex guarding [`LineState`].
///
/// The spinner thread and every caller-issued update go through [`WriteGate::with`],
/// so writes to the line and appends to the history are totally ordered.
#[derive(Clone)]
pub(crate) struct WriteGate {
    inner: Arc<Mutex<LineState>>,
}

impl WriteGate {
    pub(crate) fn new(sink: Box<dyn Write + Send>, hide_cursor: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LineState::new(sink, hide_cursor))),
        }
    }

    /// Runs `f` with exclusive access to the line.
    ///
    /// A panic on another thread while holding the gate does not wedge the
    /// display; the state is taken as-is.
    pub(crate) fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut LineState) -> R,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Like [`with`](Self::with), but returns `None` instead of waiting when the
    /// gate is held, e.g. by a spinner thread stuck in a write.
    pub(crate) fn try_with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut LineState) -> R,
    {
        let mut guard = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return None,
        };
        Some(f(&mut guard))
    }
}
