//! Field issues recorded during a validation run

use std::fmt;

use serde::Serialize;

/// What kind of check a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required value was missing, null or an empty string.
    MissingRequired,
    /// The value was present but of the wrong type.
    TypeMismatch,
    /// The value (or its length) was below `min` or above `max`.
    OutOfRange,
    /// A text value did not match the declared pattern.
    FormatMismatch,
    /// A text value contained only whitespace.
    BlankDisallowed,
}

impl IssueKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingRequired => "missing_required",
            Self::TypeMismatch => "type_mismatch",
            Self::OutOfRange => "out_of_range",
            Self::FormatMismatch => "format_mismatch",
            Self::BlankDisallowed => "blank_disallowed",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One entry of a validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted/bracketed location, e.g. `employees[2].contact.email`.
    pub path: String,
    /// Which check failed.
    pub kind: IssueKind,
    /// Default or caller-supplied message.
    pub message: String,
}

impl FieldIssue {
    /// Creates a new issue.
    pub fn new(path: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.path, self.kind, self.message)
    }
}
