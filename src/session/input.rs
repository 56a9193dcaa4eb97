// src/session/input.rs
//! Stdin and Ctrl-C delivered as channels the session can select over.

use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver};

/// Reads stdin line by line on a background thread.
///
/// The channel is a rendezvous: a line is only read ahead by one while the
/// session is busy. The channel disconnects at end of input or on a read error.
///
/// # Errors
/// Returns error if the reader thread cannot be spawned.
pub fn spawn_stdin_reader() -> Result<Receiver<String>> {
    let (tx, rx) = bounded(0);
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("stdin read failed: {e}");
                        break;
                    }
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("failed to spawn stdin reader")?;
    Ok(rx)
}

/// Installs the Ctrl-C handler. Each interrupt is delivered at most once.
///
/// # Errors
/// Returns error if a handler is already installed or the platform refuses it.
pub fn install_interrupt_handler() -> Result<Receiver<()>> {
    let (tx, rx) = bounded(1);
    ctrlc::set_handler(move || {
        let _ = tx.try_send(());
    })
    .context("failed to install Ctrl-C handler")?;
    Ok(rx)
}
