// src/agent/streaming.rs
//! Agent that reports progress token by token.

use super::{Agent, ResultRecord, TaskContext};
use crate::error::TaskError;
use crate::status::StatusKind;

/// Consumes the request one whitespace-separated token at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingAgent;

impl Agent for StreamingAgent {
    fn name(&self) -> &'static str {
        "streaming"
    }

    fn process(&mut self, request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
        cx.status
            .update(StatusKind::Thinking, "Preparing response stream...")?;
        cx.work(500)?;

        let tokens: Vec<&str> = request.split_whitespace().collect();
        let total = tokens.len();
        let mut processed = Vec::with_capacity(total);

        cx.status.update(
            StatusKind::Processing,
            format!("Processing 0/{total} tokens..."),
        )?;
        for (i, token) in tokens.iter().enumerate() {
            cx.work(200)?;
            processed.push(token.to_uppercase());
            cx.status.update(
                StatusKind::Processing,
                format!("Processing {}/{total} tokens...", i + 1),
            )?;
        }

        cx.status.complete("Stream complete")?;

        Ok(ResultRecord::new()
            .with("status", "success")
            .with("type", "streaming")
            .with("original", request)
            .with("processed", processed.join(" "))
            .with("tokens_processed", total))
    }
}
