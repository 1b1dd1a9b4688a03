//! Subscriber setup for the binary.
//!
//! Logs go to stderr so stdout stays reserved for command output.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Variables read, in order, when no `-v` flag is given.
const ENV_VARS: [&str; 2] = ["PARAMGUARD_LOG", "RUST_LOG"];

const DEFAULT_LEVEL: &str = "warn";

/// Installs the global subscriber.
pub fn init(verbosity: u8) -> Result<()> {
    let level = resolve_level(verbosity, |name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&level).with_context(|| format!("invalid log filter '{level}'"))?;

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("failed to install log subscriber")
}

/// Flags win over the environment.
fn resolve_level(verbosity: u8, lookup: impl Fn(&str) -> Option<String>) -> String {
    match verbosity {
        0 => ENV_VARS
            .iter()
            .find_map(|name| lookup(name))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
