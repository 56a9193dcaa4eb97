// src/status/display.rs
//! The status display engine.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::driver::{self, Owner, SpinnerDriver, NO_OWNER};
use super::event::{StatusEvent, StatusKind};
use super::gate::WriteGate;
use super::state::LineState;
use crate::error::DisplayError;

/// Message used by [`StatusDisplay::complete_default`].
pub const DEFAULT_COMPLETE: &str = "Complete";

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Hide the terminal cursor while a spinner animates.
    pub hide_cursor: bool,
}

/// Owns the single status line and serializes every write to it.
///
/// Discrete updates and the spinner are mutually exclusive: any update,
/// completion or error first stops a running spinner and only then draws.
pub struct StatusDisplay {
    gate: WriteGate,
    /// Slot for the running spinner. Always locked before the gate, never after.
    driver: Mutex<Option<SpinnerDriver>>,
    owner: Owner,
    generations: AtomicU64,
    live: Arc<AtomicUsize>,
}

impl StatusDisplay {
    #[must_use]
    pub fn new<W>(sink: W, options: DisplayOptions) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            gate: WriteGate::new(Box::new(sink), options.hide_cursor),
            driver: Mutex::new(None),
            owner: Arc::new(AtomicU64::new(NO_OWNER)),
            generations: AtomicU64::new(NO_OWNER),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[must_use]
    pub fn stdout(options: DisplayOptions) -> Self {
        Self::new(io::stdout(), options)
    }

    /// Records a status event and draws it in place of the current line.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be written.
    pub fn update(&self, kind: StatusKind, message: impl Into<String>) -> Result<(), DisplayError> {
        let message = message.into();
        let mut slot = self.lock_driver();
        self.halt(&mut slot);
        self.gate.with(|line| {
            settle(line)?;
            let event = line.record(kind, message);
            line.draw(&event.line())?;
            Ok(())
        })
    }

    /// Starts animating `message`, replacing any spinner already running.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be written or the thread cannot start.
    pub fn start_spinner(&self, message: impl Into<String>) -> Result<(), DisplayError> {
        let message = message.into();
        let mut slot = self.lock_driver();
        self.halt(&mut slot);

        self.gate.with(|line| {
            surface_fault(line.take_fault())?;
            line.conceal_cursor().map_err(DisplayError::from)
        })?;

        let generation = self.generations.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        self.owner.store(generation, Ordering::SeqCst);
        debug!(generation, %message, "spinner started");

        let owner = Arc::clone(&self.owner);
        match SpinnerDriver::spawn(self.gate.clone(), owner, generation, message, &self.live) {
            Ok(driver) => {
                *slot = Some(driver);
                Ok(())
            }
            Err(e) => {
                driver::release(&self.owner, generation);
                let _ = self.gate.with(LineState::reveal_cursor);
                Err(DisplayError::Spawn(e))
            }
        }
    }

    /// Stops the spinner if one is running. The last frame stays on screen.
    ///
    /// Returns within [`STOP_TIMEOUT`](super::STOP_TIMEOUT) even when the spinner
    /// thread is stuck in a write; cursor restore and fault reporting are then
    /// left to the next call.
    ///
    /// # Errors
    /// Returns error if the spinner thread failed to write a frame.
    pub fn stop_spinner(&self) -> Result<(), DisplayError> {
        let mut slot = self.lock_driver();
        if self.halt(&mut slot) {
            self.gate.with(settle)
        } else {
            self.gate.try_with(settle).unwrap_or(Ok(()))
        }
    }

    /// Reports success and seals the line.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be written.
    pub fn complete(&self, message: impl Into<String>) -> Result<(), DisplayError> {
        self.finish(StatusKind::Success, message.into())
    }

    /// [`complete`](Self::complete) with the default message.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be written.
    pub fn complete_default(&self) -> Result<(), DisplayError> {
        self.complete(DEFAULT_COMPLETE)
    }

    /// Reports failure of the current operation and seals the line.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be written.
    pub fn error(&self, message: impl Into<String>) -> Result<(), DisplayError> {
        self.finish(StatusKind::Error, message.into())
    }

    /// Writes text that is not a status report (banners, prompts, result blocks).
    ///
    /// # Errors
    /// Returns error if the terminal cannot be written.
    pub fn emit(&self, text: &str) -> Result<(), DisplayError> {
        let mut slot = self.lock_driver();
        self.halt(&mut slot);
        self.gate.with(|line| {
            settle(line)?;
            line.emit(text)?;
            Ok(())
        })
    }

    /// Snapshot of every event accepted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<StatusEvent> {
        self.gate.with(|line| line.history().to_vec())
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.owner.load(Ordering::SeqCst) != NO_OWNER
    }

    /// Number of animation threads that have not exited yet.
    #[must_use]
    pub fn live_spinners(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    fn finish(&self, kind: StatusKind, message: String) -> Result<(), DisplayError> {
        let mut slot = self.lock_driver();
        self.halt(&mut slot);
        self.gate.with(|line| {
            settle(line)?;
            let event = line.record(kind, message);
            line.seal(&event.line())?;
            Ok(())
        })
    }

    /// Releases the line from the running spinner, then waits a bounded time for
    /// its thread. Never takes the gate. Returns `false` if the thread outlived
    /// the wait.
    fn halt(&self, slot: &mut Option<SpinnerDriver>) -> bool {
        let Some(driver) = slot.take() else {
            return true;
        };
        let generation = driver.generation();
        driver::release(&self.owner, generation);
        let exited = driver.stop();
        debug!(generation, exited, "spinner stopped");
        exited
    }

    fn lock_driver(&self) -> MutexGuard<'_, Option<SpinnerDriver>> {
        self.driver.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for StatusDisplay {
    fn drop(&mut self) {
        let slot = self.driver.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(driver) = slot.take() {
            driver::release(&self.owner, driver.generation());
            driver.stop();
        }
    }
}

/// Reports a pending spinner fault and restores the cursor once no spinner runs.
fn settle(line: &mut LineState) -> Result<(), DisplayError> {
    surface_fault(line.take_fault())?;
    line.reveal_cursor()?;
    Ok(())
}

fn surface_fault(fault: Option<io::Error>) -> Result<(), DisplayError> {
    match fault {
        Some(e) => Err(DisplayError::Write(e)),
        None => Ok(()),
    }
}
