// src/bin/chatline.rs
use clap::Parser;
use colored::Colorize;

use chatline_core::cli::{self, Cli};
use chatline_core::config::Config;
use chatline_core::exit::ChatExit;
use chatline_core::logging;

fn main() -> ChatExit {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            return ChatExit::Error;
        }
    };
    logging::init(&config.logging);

    match cli::dispatch::execute(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ChatExit::Error
        }
    }
}
