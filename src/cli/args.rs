use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chatline",
    version,
    about = "Interactive request loop with a live status line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run scripted requests through the task and streaming agents
    Demo,
}
