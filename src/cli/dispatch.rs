// src/cli/dispatch.rs
use anyhow::Result;
use colored::Colorize;

use super::args::Commands;
use crate::agent::Pacer;
use crate::config::Config;
use crate::demo;
use crate::error::DisplayError;
use crate::exit::ChatExit;
use crate::session::{input, Session, SessionEnd};
use crate::status::StatusDisplay;

/// Executes a command (or the interactive loop) and maps the outcome to an exit code.
///
/// # Errors
/// Returns error if input or signal plumbing cannot be set up.
pub fn execute(command: Option<Commands>, config: &Config) -> Result<ChatExit> {
    if !config.display.color {
        colored::control::set_override(false);
    }

    let interrupts = input::install_interrupt_handler()?;
    let pace = Pacer::new(config.session.pace).with_interrupts(interrupts.clone());
    let display = StatusDisplay::stdout(config.display_options());

    let outcome = match command {
        Some(Commands::Demo) => demo::run(&display, &pace).map(|finished| {
            if finished {
                SessionEnd::Quit
            } else {
                SessionEnd::Interrupted
            }
        }),
        None => {
            let lines = input::spawn_stdin_reader()?;
            let agent = config.session.agent.build();
            Session::new(&display, agent, pace, lines, interrupts).run()
        }
    };
    Ok(finish(outcome))
}

fn finish(outcome: Result<SessionEnd, DisplayError>) -> ChatExit {
    match outcome {
        Ok(end) => {
            tracing::debug!(?end, "session finished");
            ChatExit::Success
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ChatExit::OutputFailure
        }
    }
}
