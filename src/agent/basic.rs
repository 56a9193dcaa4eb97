// src/agent/basic.rs
//! Fixed four-step agent that works on any request.

use std::time::Instant;

use super::{Agent, ResultRecord, TaskContext};
use crate::error::TaskError;
use crate::status::StatusKind;

/// Walks every request through the same fixed sequence of stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAgent;

impl Agent for BasicAgent {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn process(&mut self, request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
        let started = Instant::now();

        cx.status.update(StatusKind::Thinking, "Analyzing request...")?;
        cx.work(1000)?;

        cx.status
            .update(StatusKind::Processing, "Breaking down the task...")?;
        cx.work(500)?;

        cx.status.start_spinner("Processing components")?;
        cx.work(2000)?;
        cx.status.stop_spinner()?;

        cx.status.update(StatusKind::Info, "Generating response...")?;
        cx.work(500)?;

        cx.status.complete("Task completed successfully")?;

        Ok(ResultRecord::new()
            .with("status", "success")
            .with("response", format!("Processed request: '{request}'"))
            .with("steps_completed", 4)
            .with(
                "processing_time",
                format!("{:.1}", started.elapsed().as_secs_f64()),
            ))
    }
}
