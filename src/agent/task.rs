// src/agent/task.rs
//! Keyword-routed agent: calculation, search, analysis or general handling.

use super::{calc, figure, Agent, ResultRecord, TaskContext};
use crate::error::TaskError;
use crate::status::StatusKind;

/// Result text for a calculation request that contains no arithmetic.
pub const NO_EXPRESSION: &str = "No arithmetic expression found";

const ANALYSIS_STEPS: [&str; 5] = [
    "Loading data...",
    "Preprocessing input...",
    "Running analysis algorithms...",
    "Validating results...",
    "Generating insights...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Calculation,
    Search,
    Analysis,
    General,
}

impl TaskKind {
    /// Routes on the first keyword group that matches, in declaration order.
    #[must_use]
    pub fn classify(request: &str) -> Self {
        let lower = request.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has_any(&["calculate", "compute", "math"]) {
            Self::Calculation
        } else if has_any(&["search", "find", "look"]) {
            Self::Search
        } else if has_any(&["analyze", "review", "check"]) {
            Self::Analysis
        } else {
            Self::General
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskAgent;

impl Agent for TaskAgent {
    fn name(&self) -> &'static str {
        "task"
    }

    fn process(&mut self, request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
        cx.status
            .update(StatusKind::Thinking, "Analyzing request type...")?;
        cx.work(500)?;

        let kind = TaskKind::classify(request);
        tracing::debug!(?kind, "routed request");
        match kind {
            TaskKind::Calculation => calculation(request, cx),
            TaskKind::Search => search(request, cx),
            TaskKind::Analysis => analysis(request, cx),
            TaskKind::General => general(request, cx),
        }
    }
}

fn calculation(request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
    cx.status.update(
        StatusKind::Processing,
        "Parsing mathematical expression...",
    )?;
    cx.work(500)?;
    let Some(expression) = calc::extract(request) else {
        cx.status.complete("Calculation complete")?;
        return Ok(ResultRecord::new()
            .with("status", "success")
            .with("type", "calculation")
            .with("request", request)
            .with("result", NO_EXPRESSION));
    };

    cx.status.start_spinner("Computing result")?;
    cx.work(500)?;
    let value = calc::evaluate(expression)?;
    cx.status.stop_spinner()?;

    cx.status.complete("Calculation complete")?;

    Ok(ResultRecord::new()
        .with("status", "success")
        .with("type", "calculation")
        .with("request", request)
        .with("expression", expression)
        .with("result", calc::format_number(value)))
}

fn search(request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
    cx.status.start_spinner("Searching database")?;
    cx.work(1500)?;
    cx.status.stop_spinner()?;

    cx.status.update(StatusKind::Processing, "Ranking results...")?;
    cx.work(500)?;

    cx.status.update(StatusKind::Info, "Formatting output...")?;
    cx.work(300)?;

    cx.status.complete("Search complete")?;

    Ok(ResultRecord::new()
        .with("status", "success")
        .with("type", "search")
        .with("request", request)
        .with("results_found", figure(request, 5, 50))
        .with("top_result", "Example result item")
        .with("relevance_score", format!("{}%", figure(request, 60, 99))))
}

fn analysis(request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
    for step in ANALYSIS_STEPS {
        cx.status.update(StatusKind::Processing, step)?;
        cx.work(600)?;
    }

    cx.status.complete("Analysis complete")?;

    Ok(ResultRecord::new()
        .with("status", "success")
        .with("type", "analysis")
        .with("request", request)
        .with("insights_generated", figure(request, 3, 8))
        .with("confidence_level", "High")
        .with("recommendation", "Consider reviewing the detailed report"))
}

fn general(request: &str, cx: &TaskContext<'_>) -> Result<ResultRecord, TaskError> {
    cx.status
        .update(StatusKind::Thinking, "Understanding request...")?;
    cx.work(800)?;

    cx.status.start_spinner("Processing request")?;
    cx.work(1200)?;
    cx.status.stop_spinner()?;

    cx.status.complete("Request processed")?;

    Ok(ResultRecord::new()
        .with("status", "success")
        .with("type", "general")
        .with("request", request)
        .with("response", "Your request has been processed successfully")
        .with("next_steps", "You can continue with another request"))
}
