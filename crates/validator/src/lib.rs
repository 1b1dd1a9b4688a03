//! # paramguard-validator
//!
//! Declarative, recursive validation of nested request parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use paramguard_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::build(|r| {
//!     r.param("email", ValueType::Text, ConstraintGroup::required());
//!     r.param_with("users", ValueType::List, ConstraintGroup::new(), |u| {
//!         u.param("name", ValueType::Text, ConstraintGroup::required());
//!         u.param("age", ValueType::WholeNumber, ConstraintGroup::new().min(18));
//!     });
//! });
//!
//! let payload = json!({
//!     "email": "a@example.com",
//!     "users": [{ "name": "John", "age": 25 }, { "age": 16 }]
//! });
//!
//! let outcome = validate(&payload, &rules);
//! let paths: Vec<_> = outcome.issues().iter().map(|i| i.path.as_str()).collect();
//! assert_eq!(paths, ["users[1].name", "users[1].age"]);
//!
//! let error = outcome.into_first_error().unwrap_err();
//! assert_eq!(error.message, "Parameter users[1].name is required");
//! ```
//!
//! ## Layout
//!
//! - [`rule`]: [`RuleSet`](rule::RuleSet), [`RuleNode`](rule::RuleNode),
//!   [`ConstraintGroup`](rule::ConstraintGroup), [`ValueType`](rule::ValueType)
//! - [`builder`]: the fluent [`RuleBuilder`](builder::RuleBuilder)
//! - [`engine`]: [`validate`](engine::validate), [`Validator`](engine::Validator),
//!   [`Outcome`](engine::Outcome)
//! - [`foundation`]: issues, caller-facing errors, field paths
//! - [`params`]: the [`ParameterBag`](params::ParameterBag) normalization seam
//! - [`config`]: escalation settings

pub mod builder;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod params;
pub mod prelude;
pub mod rule;
