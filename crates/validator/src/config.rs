//! Escalation settings
//!
//! The engine always collects every issue. What a caller does with them is
//! configured here: surface the first one, or all of them, and with which
//! [`Status`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::Status;
use crate::rule::RuleError;

/// Environment variable selecting [`Surfacing`].
pub const ENV_SURFACING: &str = "PARAMGUARD_SURFACING";

/// Environment variable selecting the escalation [`Status`].
pub const ENV_STATUS: &str = "PARAMGUARD_STATUS";

/// How many issues a rejected payload surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surfacing {
    /// Only the first issue, in field-declaration order.
    #[default]
    First,
    /// Every issue.
    All,
}

impl fmt::Display for Surfacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::All => "all",
        })
    }
}

impl FromStr for Surfacing {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            other => Err(RuleError::UnknownSurfacing(other.to_string())),
        }
    }
}

/// Settings applied by [`Validator::check`](crate::engine::Validator::check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// First issue only, or all issues.
    pub surfacing: Surfacing,
    /// Status attached to surfaced errors.
    pub status: Status,
}

impl ValidatorConfig {
    /// Defaults overridden by `PARAMGUARD_SURFACING` and `PARAMGUARD_STATUS`.
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses a JSON document; missing keys keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sets the surfacing mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_surfacing(mut self, surfacing: Surfacing) -> Self {
        self.surfacing = surfacing;
        self
    }

    /// Sets the escalation status.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SURFACING) {
            match raw.parse() {
                Ok(surfacing) => config.surfacing = surfacing,
                Err(error) => tracing::warn!(%error, var = ENV_SURFACING, "ignoring invalid setting"),
            }
        }
        if let Some(raw) = lookup(ENV_STATUS) {
            match raw.parse() {
                Ok(status) => config.status = status,
                Err(error) => tracing::warn!(%error, var = ENV_STATUS, "ignoring invalid setting"),
            }
        }

        config
    }
}
