//! Core error and path types
//!
//! This module contains the building blocks shared by the rule model and the
//! engine:
//!
//! - **Issues**: [`FieldIssue`], [`IssueKind`]: what a run records
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`Status`]: what a
//!   caller surfaces
//! - **Paths**: [`FieldPath`]: dotted/bracketed locations

pub mod error;
pub mod issue;
pub mod path;

pub use error::{DEFAULT_FIELD, DEFAULT_MESSAGE, Status, ValidationError, ValidationErrors};
pub use issue::{FieldIssue, IssueKind};
pub use path::FieldPath;
