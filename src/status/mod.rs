// src/status/mod.rs
//! Single-line terminal status display with a background spinner.
//!
//! [`StatusDisplay`] is the only writer of the status line. Caller updates and
//! spinner frames both pass through its write gate, so output from the
//! animation thread never interleaves with discrete reports.

pub mod display;
pub mod driver;
pub mod event;
pub mod render;
pub mod sink;
mod gate;
mod state;

pub use display::{DisplayOptions, StatusDisplay, DEFAULT_COMPLETE};
pub use driver::{FRAME_PERIOD, STOP_TIMEOUT};
pub use event::{StatusEvent, StatusKind};
pub use sink::MemorySink;
