//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// tool-enforcer - Check installed tool versions against declared requirements.
#[derive(Debug, Parser)]
#[command(name = "tool-enforcer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default tool-enforcer.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also report binaries that satisfy their requirement
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check configured binaries (default if no command specified)
    Check(CheckArgs),

    /// Evaluate a version against a requirement
    Eval(EvalArgs),

    /// List supported programs
    Programs,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `eval` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EvalArgs {
    /// Version to test (e.g., 2.39.1)
    #[arg(id = "candidate", value_name = "VERSION")]
    pub version: String,

    /// Requirement to test against (e.g., "~2" or ">= 2.30")
    pub requirement: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
