// src/session/mod.rs
//! The read-process-print loop.
//!
//! The session is the recovery boundary: request failures are reported on the
//! status line and the loop continues, while display failures end it.

pub mod banner;
pub mod input;

use crossbeam_channel::{never, select, Receiver};
use tracing::{debug, info};

use crate::agent::{Agent, Pacer, TaskContext};
use crate::error::{DisplayError, TaskError};
use crate::status::StatusDisplay;

/// Words that end the session, matched case-insensitively.
pub const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "q"];

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Empty,
    Exit,
    Request(&'a str),
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if EXIT_KEYWORDS
            .iter()
            .any(|k| trimmed.eq_ignore_ascii_case(k))
        {
            Self::Exit
        } else {
            Self::Request(trimmed)
        }
    }
}

/// Why the loop stopped. All of these are clean exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    Interrupted,
}

enum Next {
    Line(String),
    Closed,
    Interrupted,
}

pub struct Session<'a> {
    display: &'a StatusDisplay,
    agent: Box<dyn Agent + Send>,
    pace: Pacer,
    lines: Receiver<String>,
    interrupts: Receiver<()>,
}

impl<'a> Session<'a> {
    /// `pace` should share `interrupts` so simulated work is interruptible too.
    #[must_use]
    pub fn new(
        display: &'a StatusDisplay,
        agent: Box<dyn Agent + Send>,
        pace: Pacer,
        lines: Receiver<String>,
        interrupts: Receiver<()>,
    ) -> Self {
        Self {
            display,
            agent,
            pace,
            lines,
            interrupts,
        }
    }

    /// Runs until an exit keyword, end of input or an interrupt.
    ///
    /// # Errors
    /// Returns error only if the terminal cannot be written.
    pub fn run(&mut self) -> Result<SessionEnd, DisplayError> {
        info!(agent = self.agent.name(), "session started");
        self.display.emit(&banner::welcome())?;

        loop {
            self.display.emit(banner::PROMPT)?;
            let line = match self.next_line() {
                Next::Line(line) => line,
                Next::Closed => {
                    self.display.emit(&format!("\n{}\n", banner::GOODBYE))?;
                    return Ok(SessionEnd::EndOfInput);
                }
                Next::Interrupted => return self.interrupted(),
            };

            match Input::parse(&line) {
                Input::Empty => {}
                Input::Exit => {
                    self.display.emit(&format!("{}\n", banner::GOODBYE))?;
                    return Ok(SessionEnd::Quit);
                }
                Input::Request(request) => {
                    if let Some(end) = self.handle(request)? {
                        return Ok(end);
                    }
                }
            }
        }
    }

    fn handle(&mut self, request: &str) -> Result<Option<SessionEnd>, DisplayError> {
        debug!(request, "processing request");
        self.display.emit("\n")?;

        let cx = TaskContext {
            status: self.display,
            pace: &self.pace,
        };
        match self.agent.process(request, &cx) {
            Ok(record) => {
                self.display.emit(&banner::result_block(&record))?;
                Ok(None)
            }
            Err(TaskError::Interrupted) => self.interrupted().map(Some),
            Err(TaskError::Display(e)) => Err(e),
            Err(e) => {
                debug!("request failed: {e}");
                self.display.error(format!("Error: {e}"))?;
                Ok(None)
            }
        }
    }

    fn interrupted(&self) -> Result<SessionEnd, DisplayError> {
        self.display.stop_spinner()?;
        self.display.emit(&format!("\n\n{}\n", banner::INTERRUPTED))?;
        Ok(SessionEnd::Interrupted)
    }

    fn next_line(&mut self) -> Next {
        loop {
            let interrupt = select! {
                recv(self.lines) -> msg => return msg.map_or(Next::Closed, Next::Line),
                recv(self.interrupts) -> msg => msg,
            };
            match interrupt {
                Ok(()) => return Next::Interrupted,
                // No handler left to fire; stop polling it.
                Err(_) => self.interrupts = never(),
            }
        }
    }
}
