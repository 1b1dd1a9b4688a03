//! Rule nodes

use serde::Serialize;

use crate::rule::{ConstraintGroup, ValueType};

/// One field's compiled validation contract.
///
/// Nodes own their children, so a rule tree has no back-references and can
/// be shared read-only between any number of validation runs.
///
/// A node with an empty `field` is inert: the engine skips it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleNode {
    /// Key of the value within its parent container.
    pub field: String,
    /// Type the value must have.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Independent constraint groups, evaluated in order.
    #[serde(rename = "opts")]
    pub constraints: Vec<ConstraintGroup>,
    /// Schema of a nested object, or of each object in a list.
    #[serde(rename = "items", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RuleNode>,
}

impl RuleNode {
    /// A node with no constraint groups and no children.
    pub fn new(field: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            field: field.into(),
            value_type,
            constraints: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a constraint group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_constraint(mut self, group: ConstraintGroup) -> Self {
        self.constraints.push(group);
        self
    }

    /// Replaces the constraint groups.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_constraints(mut self, groups: Vec<ConstraintGroup>) -> Self {
        self.constraints = groups;
        self
    }

    /// Replaces the children.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_children(mut self, children: Vec<RuleNode>) -> Self {
        self.children = children;
        self
    }

    /// False for nodes the engine skips.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.field.is_empty()
    }

    /// True if any group marks the field required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.constraints.iter().any(|group| group.required)
    }
}
