//! Caller-facing error types
//!
//! A [`ValidationError`] is a plain value: one field, one [`Status`], one
//! message and an optional structured payload. It is what an HTTP-style
//! boundary renders, so it carries everything needed to build an error body
//! without going back to the raw [`Outcome`](crate::engine::Outcome).
//!
//! # Defaults
//!
//! Constructors default the status to [`Status::Unprocessable`] and the
//! message to [`DEFAULT_MESSAGE`] ("Something went wrong"). Some call sites
//! rely on this and deliberately omit a message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::foundation::issue::FieldIssue;
use crate::rule::RuleError;

/// Message used when a [`ValidationError`] is built without one.
pub const DEFAULT_MESSAGE: &str = "Something went wrong";

/// Field name used when an error is not tied to a specific parameter.
pub const DEFAULT_FIELD: &str = "base";

// ============================================================================
// STATUS
// ============================================================================

/// Coarse classification of a failure, independent of its message.
///
/// Serializes as the snake_case symbol returned by [`Status::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The request was well-formed but its parameters were rejected (422).
    #[default]
    #[serde(rename = "unprocessable_entity", alias = "unprocessable")]
    Unprocessable,
    /// The request itself was malformed (400).
    BadRequest,
    /// Authentication is missing or invalid (401).
    Unauthorized,
    /// The caller may not perform this request (403).
    Forbidden,
    /// A referenced resource does not exist (404).
    NotFound,
    /// The request conflicts with current state (409).
    Conflict,
    /// Unexpected failure on the validating side (500).
    #[serde(rename = "internal_server_error", alias = "internal")]
    Internal,
}

impl Status {
    /// Returns the snake_case symbol for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unprocessable => "unprocessable_entity",
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal_server_error",
        }
    }

    /// Returns the matching HTTP status code.
    #[must_use]
    pub const fn http_code(self) -> u16 {
        match self {
            Self::Unprocessable => 422,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unprocessable_entity" | "unprocessable" | "422" => Ok(Self::Unprocessable),
            "bad_request" | "400" => Ok(Self::BadRequest),
            "unauthorized" | "401" => Ok(Self::Unauthorized),
            "forbidden" | "403" => Ok(Self::Forbidden),
            "not_found" | "404" => Ok(Self::NotFound),
            "conflict" | "409" => Ok(Self::Conflict),
            "internal_server_error" | "internal" | "500" => Ok(Self::Internal),
            other => Err(RuleError::UnknownStatus(other.to_string())),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single caller-facing validation failure.
///
/// # Examples
///
/// ```
/// use paramguard_validator::foundation::{Status, ValidationError};
///
/// let error = ValidationError::new("email").with_message("Parameter email is required");
/// assert_eq!(error.status, Status::Unprocessable);
///
/// let generic = ValidationError::new("email");
/// assert_eq!(generic.message, "Something went wrong");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Path of the offending parameter, e.g. `users[1].name`.
    pub field: String,
    /// Coarse classification.
    pub status: Status,
    /// Human-readable message.
    pub message: String,
    /// Free-form structured detail for machine clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Value>,
}

impl ValidationError {
    /// Creates an error for `field` with the default status and message.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            status: Status::default(),
            message: DEFAULT_MESSAGE.to_string(),
            additional_info: None,
        }
    }

    /// Sets the status.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches structured detail.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_additional_info(mut self, info: Value) -> Self {
        self.additional_info = Some(info);
        self
    }

    /// Builds an error from a recorded field issue.
    ///
    /// The issue kind is kept in `additional_info` under `"kind"`.
    pub fn from_issue(issue: FieldIssue, status: Status) -> Self {
        let kind = issue.kind.code();
        Self {
            field: issue.path,
            status,
            message: issue.message,
            additional_info: Some(json!({ "kind": kind })),
        }
    }

    /// Renders the error as a JSON body.
    pub fn to_json_value(&self) -> Value {
        json!({
            "field": self.field,
            "status": self.status.as_str(),
            "code": self.status.http_code(),
            "message": self.message,
            "additional_info": self.additional_info,
        })
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD)
    }
}

impl From<FieldIssue> for ValidationError {
    fn from(issue: FieldIssue) -> Self {
        Self::from_issue(issue, Status::default())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in recording order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first recorded error.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Consumes the collection, keeping only the first error.
    pub fn into_first(self) -> Option<ValidationError> {
        self.errors.into_iter().next()
    }

    /// Renders every error as a JSON array.
    pub fn to_json_value(&self) -> Value {
        Value::Array(self.errors.iter().map(ValidationError::to_json_value).collect())
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.add(error);
        }
        errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. [{}] {}", i + 1, error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
