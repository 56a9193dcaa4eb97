// src/agent/pacer.rs
//! Interruptible pauses standing in for real work.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::error::TaskError;

const MAX_SCALE: f64 = 1000.0;

pub struct Pacer {
    scale: f64,
    interrupts: Option<Receiver<()>>,
}

impl Pacer {
    /// `scale` multiplies every nominal delay, clamped to `0..=MAX_SCALE`.
    /// Non-finite values fall back to `1.0`.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(0.0, MAX_SCALE)
        } else {
            1.0
        };
        Self {
            scale,
            interrupts: None,
        }
    }

    /// A pacer that never waits.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(0.0)
    }

    /// Makes pauses end early with `Interrupted` when `rx` fires.
    #[must_use]
    pub fn with_interrupts(mut self, rx: Receiver<()>) -> Self {
        self.interrupts = Some(rx);
        self
    }

    /// # Errors
    /// Returns `TaskError::Interrupted` if an interrupt arrives before the pause ends.
    pub fn pause(&self, nominal: Duration) -> Result<(), TaskError> {
        let wait = nominal.mul_f64(self.scale);
        let Some(rx) = &self.interrupts else {
            thread::sleep(wait);
            return Ok(());
        };
        match rx.recv_timeout(wait) {
            Ok(()) => Err(TaskError::Interrupted),
            Err(RecvTimeoutError::Timeout) => Ok(()),
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(wait);
                Ok(())
            }
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(1.0)
    }
}
