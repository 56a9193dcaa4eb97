// src/demo.rs
//! Scripted walk through the bundled agents, no input required.

use crate::agent::{Agent, Pacer, StreamingAgent, TaskAgent, TaskContext};
use crate::error::{DisplayError, TaskError};
use crate::session::banner;
use crate::status::StatusDisplay;

pub const TASK_REQUESTS: [&str; 5] = [
    "Calculate the sum of numbers",
    "Calculate 12 * (3 + 4)",
    "Search for Rust tutorials",
    "Analyze this dataset for patterns",
    "Help me with my project",
];

pub const STREAMING_REQUEST: &str = "Process this text word by word";

/// Runs every scripted request and prints its result block.
///
/// Returns `Ok(false)` if interrupted before the script finished.
///
/// # Errors
/// Returns error if the terminal cannot be written.
pub fn run(display: &StatusDisplay, pace: &Pacer) -> Result<bool, DisplayError> {
    let wide = banner::rule(60);
    display.emit(&format!("\n{wide}\n  AGENT DEMONSTRATION\n{wide}\n"))?;

    display.emit(&format!("\n1. Task Agent Demo:\n{}\n", "-".repeat(40)))?;
    let mut task = TaskAgent;
    for request in TASK_REQUESTS {
        if !run_one(&mut task, request, display, pace)? {
            return Ok(false);
        }
    }

    display.emit(&format!("\n2. Streaming Agent Demo:\n{}\n", "-".repeat(40)))?;
    run_one(&mut StreamingAgent, STREAMING_REQUEST, display, pace)
}

fn run_one(
    agent: &mut dyn Agent,
    request: &str,
    display: &StatusDisplay,
    pace: &Pacer,
) -> Result<bool, DisplayError> {
    display.emit(&format!("\nRequest: '{request}'\n"))?;
    let cx = TaskContext {
        status: display,
        pace,
    };
    match agent.process(request, &cx) {
        Ok(record) => display.emit(&banner::result_block(&record))?,
        Err(TaskError::Interrupted) => {
            display.stop_spinner()?;
            display.emit(&format!("\n\n{}\n", banner::INTERRUPTED))?;
            return Ok(false);
        }
        Err(TaskError::Display(e)) => return Err(e),
        Err(e) => display.error(format!("Error: {e}"))?,
    }
    Ok(true)
}
