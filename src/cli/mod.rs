//! Command-line interface for azproof.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, CollectArgs, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult, RunContext};
