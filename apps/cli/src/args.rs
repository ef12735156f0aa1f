//! Command-line surface of the `ophub` binary.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ophub")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and override translation response options")]
pub struct Cli {
    /// Options file; `OPHUB__` environment variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Raise the log level once per occurrence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every field and flag with its default
    List {
        /// Print one JSON object instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Print current values after config and environment overrides
    Get {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Apply `name=value` assignments in order and print the result
    Set {
        /// Values parse as JSON scalars, else as plain strings
        #[arg(required = true, value_name = "NAME=VALUE")]
        assignments: Vec<String>,

        /// Print every option as one JSON object
        #[arg(long)]
        json: bool,
    },
}
