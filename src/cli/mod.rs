//! Command-line interface for tool-enforcer.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, EvalArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
