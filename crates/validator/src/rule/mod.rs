//! Rule trees
//!
//! A [`RuleSet`] maps field names to [`RuleNode`]s in declaration order.
//! Each node names a field, its [`ValueType`], a list of independent
//! [`ConstraintGroup`]s and, for objects and lists of objects, child nodes.
//!
//! Rule sets are built once (with [`RuleBuilder`](crate::builder::RuleBuilder),
//! from hand-assembled nodes, or compiled from JSON with
//! [`RuleSet::from_json`]) and then reused for every validation run.

mod compile;
pub mod constraint;
pub mod node;
pub mod set;
pub mod value_type;

pub use constraint::{Bound, ConstraintGroup, ElementRule, Pattern};
pub use node::RuleNode;
pub use set::RuleSet;
pub use value_type::ValueType;

/// Errors raised while constructing rules.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// A type tag did not name any [`ValueType`].
    #[error("unknown value type '{0}'")]
    UnknownType(String),

    /// A status symbol did not name any [`Status`](crate::foundation::Status).
    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    /// A surfacing mode did not name any [`Surfacing`](crate::config::Surfacing).
    #[error("unknown surfacing mode '{0}'")]
    UnknownSurfacing(String),

    /// A `format` pattern failed to compile.
    #[error("invalid format pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule description was not valid JSON.
    #[error("invalid rule description: {0}")]
    Json(#[from] serde_json::Error),
}
