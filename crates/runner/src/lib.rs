pub mod commands;
pub mod runner;

pub use commands::{format_invocation, parse_command_line};
pub use runner::{CommandRunner, RunOutcome};
