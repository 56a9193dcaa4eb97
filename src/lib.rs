// src/lib.rs
//! Terminal chat agent with a single-line live status display.

pub mod agent;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod exit;
pub mod logging;
pub mod session;
pub mod status;
