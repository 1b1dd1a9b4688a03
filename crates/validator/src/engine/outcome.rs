//! Results of a validation run

use serde::Serialize;
use serde_json::Value;

use crate::config::Surfacing;
use crate::foundation::{FieldIssue, Status, ValidationError, ValidationErrors};

/// Issues recorded by one run, in field-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    issues: Vec<FieldIssue>,
}

impl Report {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// All recorded issues.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Consumes the report.
    #[must_use]
    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }
}

/// What a call to `validate` found.
///
/// `NoRules` is kept apart from a clean report so callers can tell "nothing
/// was checked" from "everything passed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rule set was empty or absent; no traversal happened.
    NoRules,
    /// The payload was checked.
    Checked(Report),
}

impl Outcome {
    /// True when no traversal happened.
    #[must_use]
    pub fn is_no_rules(&self) -> bool {
        matches!(self, Self::NoRules)
    }

    /// True when the payload was checked and nothing was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Checked(report) if report.is_empty())
    }

    /// True when at least one issue was recorded.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues().is_empty()
    }

    /// Recorded issues; empty for [`Outcome::NoRules`].
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::NoRules => &[],
            Self::Checked(report) => report.issues(),
        }
    }

    /// The first recorded issue.
    #[must_use]
    pub fn first_issue(&self) -> Option<&FieldIssue> {
        self.issues().first()
    }

    /// Surfaces the first issue as an error with the default status.
    pub fn into_first_error(self) -> Result<(), ValidationError> {
        match self.escalate(Surfacing::First, Status::default()) {
            Ok(()) => Ok(()),
            Err(Rejection::Single(error)) => Err(error),
            Err(Rejection::Multiple(errors)) => match errors.into_first() {
                Some(error) => Err(error),
                None => Ok(()),
            },
        }
    }

    /// Surfaces every issue with the default status.
    pub fn into_all_errors(self) -> Result<(), ValidationErrors> {
        match self.escalate(Surfacing::All, Status::default()) {
            Ok(()) => Ok(()),
            Err(Rejection::Single(error)) => Err(std::iter::once(error).collect()),
            Err(Rejection::Multiple(errors)) => Err(errors),
        }
    }

    /// Turns recorded issues into a [`Rejection`].
    ///
    /// [`Outcome::NoRules`] and a clean report both pass.
    pub fn escalate(self, surfacing: Surfacing, status: Status) -> Result<(), Rejection> {
        let issues = match self {
            Self::NoRules => return Ok(()),
            Self::Checked(report) => report.into_issues(),
        };

        let mut errors = issues
            .into_iter()
            .map(|issue| ValidationError::from_issue(issue, status));

        match surfacing {
            Surfacing::First => match errors.next() {
                Some(error) => Err(Rejection::Single(error)),
                None => Ok(()),
            },
            Surfacing::All => {
                let errors: ValidationErrors = errors.collect();
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(Rejection::Multiple(errors))
                }
            }
        }
    }
}

/// A payload rejected by [`Outcome::escalate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    /// Only the first issue was surfaced.
    #[error(transparent)]
    Single(ValidationError),
    /// Every issue was surfaced.
    #[error(transparent)]
    Multiple(ValidationErrors),
}

impl Rejection {
    /// Status shared by the surfaced errors.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Single(error) => error.status,
            Self::Multiple(errors) => errors.first().map_or_else(Status::default, |e| e.status),
        }
    }

    /// Surfaced errors, in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Single(error) => std::slice::from_ref(error),
            Self::Multiple(errors) => errors.errors(),
        }
    }

    /// Renders the rejection as a JSON body: an object for a single error,
    /// `{"errors": [...]}` for several.
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Single(error) => error.to_json_value(),
            Self::Multiple(errors) => serde_json::json!({ "errors": errors.to_json_value() }),
        }
    }
}
