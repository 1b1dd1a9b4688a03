//! `paramguard check`

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use paramguard_validator::config::{Surfacing, ValidatorConfig};
use paramguard_validator::engine::{Rejection, Validator};
use serde_json::json;

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::{is_stdin, load_payload, load_rules};

/// Exit code for a rejected payload. Usage and I/O errors exit with 2.
const REJECTED: u8 = 1;

pub fn run(args: &CheckArgs) -> Result<ExitCode> {
    ensure_single_stdin(args)?;

    let rules = load_rules(&args.rules)?;
    let payload = load_payload(&args.payload)?;

    let config = resolve_config(args, ValidatorConfig::from_env());
    let validator = Validator::new(&rules).with_config(config);

    let outcome = validator.validate(&payload);
    let no_rules = outcome.is_no_rules();
    match outcome.escalate(config.surfacing, config.status) {
        Ok(()) => {
            print_accepted(args.format, no_rules)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(rejection) => {
            tracing::info!(
                errors = rejection.errors().len(),
                status = %rejection.status(),
                "payload rejected"
            );
            print_rejection(args.format, &rejection)?;
            Ok(ExitCode::from(REJECTED))
        }
    }
}

/// Stdin can be read once; only one input may name it.
fn ensure_single_stdin(args: &CheckArgs) -> Result<()> {
    if is_stdin(&args.rules) && is_stdin(&args.payload) {
        bail!("--rules and --payload cannot both read from stdin; pass a file for one of them");
    }
    Ok(())
}

/// Flags override whatever the environment configured.
fn resolve_config(args: &CheckArgs, mut config: ValidatorConfig) -> ValidatorConfig {
    if args.all {
        config = config.with_surfacing(Surfacing::All);
    }
    if let Some(status) = args.status {
        config = config.with_status(status);
    }
    config
}

fn print_accepted(format: OutputFormat, no_rules: bool) -> Result<()> {
    match format {
        OutputFormat::Text if no_rules => println!("no rules to check"),
        OutputFormat::Text => println!("ok"),
        OutputFormat::Json => {
            let body = json!({ "valid": true, "checked": !no_rules });
            println!("{}", serde_json::to_string_pretty(&body).context("failed to render result")?);
        }
    }
    Ok(())
}

fn print_rejection(format: OutputFormat, rejection: &Rejection) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for error in rejection.errors() {
                println!("{}: {}", error.field, error.message);
            }
        }
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&rejection.to_json_value())
                .context("failed to render errors")?;
            println!("{body}");
        }
    }
    Ok(())
}
