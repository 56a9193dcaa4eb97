// src/agent/mod.rs
//! Request processors that drive the status display.
//!
//! An [`Agent`] receives one request, reports progress through the
//! [`StatusDisplay`] in its [`TaskContext`], finishes the operation with
//! `complete` or `error`, and returns a [`ResultRecord`].

pub mod basic;
pub mod calc;
pub mod pacer;
pub mod record;
pub mod streaming;
pub mod task;

pub use basic::BasicAgent;
pub use pacer::Pacer;
pub use record::ResultRecord;
pub use streaming::StreamingAgent;
pub use task::TaskAgent;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::TaskError;
use crate::status::StatusDisplay;

/// What an agent gets to work with while handling a request.
pub struct TaskContext<'a> {
    pub status: &'a StatusDisplay,
    pub pace: &'a Pacer,
}

impl TaskContext<'_> {
    /// Simulated work of nominal length `millis`.
    ///
    /// # Errors
    /// Returns `TaskError::Interrupted` if an interrupt arrives while waiting.
    pub fn work(&self, millis: u64) -> Result<(), TaskError> {
        self.pace.pause(Duration::from_millis(millis))
    }
}

pub trait Agent {
    fn name(&self) -> &'static str;

    /// Handles one request.
    ///
    /// # Errors
    /// Any error is reported by the caller; `Interrupted` and display failures
    /// end the session.
    fn process(&mut self, request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Basic,
    #[default]
    Task,
    Streaming,
}

impl AgentKind {
    #[must_use]
    pub fn build(self) -> Box<dyn Agent + Send> {
        match self {
            Self::Basic => Box::new(BasicAgent),
            Self::Task => Box::new(TaskAgent),
            Self::Streaming => Box::new(StreamingAgent),
        }
    }
}

/// Stable pseudo-random figure in `low..=high` derived from `request` (FNV-1a).
pub(crate) fn figure(request: &str, low: u64, high: u64) -> u64 {
    let hash = request.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
        (acc ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    });
    low + hash % (high - low + 1)
}
