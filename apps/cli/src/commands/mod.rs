//! Subcommand implementations.

pub mod check;
pub mod inspect;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use paramguard_validator::rule::RuleSet;
use serde_json::Value;

/// True when `path` names stdin.
pub(crate) fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads a file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub(crate) fn load_rules(path: &Path) -> Result<RuleSet> {
    let text = read_input(path)?;
    let rules = RuleSet::from_json_str(&text)
        .with_context(|| format!("failed to parse rules from {}", path.display()))?;
    tracing::debug!(path = %path.display(), fields = rules.len(), "loaded rules");
    Ok(rules)
}

pub(crate) fn load_payload(path: &Path) -> Result<Value> {
    let text = read_input(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse payload from {}", path.display()))
}
