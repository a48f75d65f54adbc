//! ledlink CLI library.
//!
//! This library exposes the CLI functionality for use in tests and as a library.
//! It provides:
//! - Argument parsing ([`Cli`])
//! - The `stream`, `patterns` and `ports` commands
//! - Timing reports and user-facing messages

pub mod commands;
pub mod messages;
pub mod report;

use clap::{Parser, Subcommand};

pub use commands::link_args::LinkArgs;
pub use commands::patterns::{PatternsArgs, handle_patterns, run_patterns};
pub use commands::stream::{StreamArgs, handle_stream, run_stream};
pub use report::RunReport;

/// Stream generated colors to an LED strip controller over serial
#[derive(Debug, Parser)]
#[command(name = "ledlink", version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stream a rolling color scheme, one update per frame
    Stream(StreamArgs),
    /// Stream a wave pattern with an optional tint, sending only changed frames
    Patterns(PatternsArgs),
    /// List available serial ports
    Ports,
}
