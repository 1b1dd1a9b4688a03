//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use paramguard_validator::foundation::Status;

/// Check JSON payloads against declarative parameter rules.
#[derive(Debug, Parser)]
#[command(name = "paramguard", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a payload against a rule description.
    Check(CheckArgs),
    /// Print the compiled rule set.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON rule description.
    #[arg(short, long)]
    pub rules: PathBuf,

    /// JSON payload, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub payload: PathBuf,

    /// Report every issue instead of the first one.
    #[arg(long)]
    pub all: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Status attached to reported errors, e.g. `bad_request`.
    #[arg(long)]
    pub status: Option<Status>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// JSON rule description.
    #[arg(short, long)]
    pub rules: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `field: message` line per error.
    Text,
    /// The rejection body as JSON.
    Json,
}
