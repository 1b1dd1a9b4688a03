//! `paramguard inspect`

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::cli::InspectArgs;
use crate::commands::load_rules;

pub fn run(args: &InspectArgs) -> Result<ExitCode> {
    let rules = load_rules(&args.rules)?;
    let rendered = serde_json::to_string_pretty(&rules).context("failed to render rules")?;
    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}
