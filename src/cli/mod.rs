//! CLI layer: argument parsing and action dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::{dispatch, execute_command, Action};
pub use error::{CliError, CliResult};
