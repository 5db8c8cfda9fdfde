// Front end: command handlers, text rendering and report export.

pub mod render;
pub mod report;
pub mod shell;

pub use shell::{parse_command, Command, Outcome, Shell};
