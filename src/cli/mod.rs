// src/cli/mod.rs
//! Command entry points.

pub mod args;
pub mod dispatch;

pub use args::{Cli, Commands};
