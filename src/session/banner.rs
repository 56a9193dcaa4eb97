// src/session/banner.rs
//! Fixed text printed around the status line.

use colored::Colorize;

use crate::agent::ResultRecord;

pub const PROMPT: &str = "You> ";
pub const GOODBYE: &str = "Goodbye!";
pub const INTERRUPTED: &str = "Interrupted by user. Exiting...";

const RULE_WIDTH: usize = 50;

#[must_use]
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

#[must_use]
pub fn welcome() -> String {
    let rule = rule(RULE_WIDTH);
    format!(
        "\n{rule}\n  {}\n{rule}\nType your request and press Enter.\nType 'exit', 'quit', or 'q' to quit.\n{rule}\n\n",
        "COMMAND LINE CHAT AGENT".bold()
    )
}

/// The bordered block printed after every finished request.
#[must_use]
pub fn result_block(record: &ResultRecord) -> String {
    let rule = rule(RULE_WIDTH);
    let mut out = format!("\n{rule}\n{}\n{rule}\n", "RESULT:".bold());
    for (key, value) in record.iter() {
        out.push_str(&format!("  {key}: {value}\n"));
    }
    out.push_str(&rule);
    out.push_str("\n\n");
    out
}
