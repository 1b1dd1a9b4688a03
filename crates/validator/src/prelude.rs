//! Prelude module for convenient imports.
//!
//! ```rust
//! use paramguard_validator::prelude::*;
//!
//! let rules = RuleSet::build(|r| {
//!     r.param("name", ValueType::Text, ConstraintGroup::required());
//! });
//! assert!(validate(&serde_json::json!({ "name": "John" }), &rules).is_valid());
//! ```

pub use crate::builder::RuleBuilder;
pub use crate::config::{Surfacing, ValidatorConfig};
pub use crate::engine::{Outcome, Rejection, Report, Validator, validate};
pub use crate::foundation::{
    FieldIssue, FieldPath, IssueKind, Status, ValidationError, ValidationErrors,
};
pub use crate::params::ParameterBag;
pub use crate::rule::{
    Bound, ConstraintGroup, ElementRule, Pattern, RuleError, RuleNode, RuleSet, ValueType,
};
