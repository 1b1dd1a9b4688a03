//! Fluent rule builder
//!
//! ```
//! use paramguard_validator::builder::RuleBuilder;
//! use paramguard_validator::rule::{ConstraintGroup, ValueType};
//!
//! let mut builder = RuleBuilder::new();
//! builder
//!     .param("email", ValueType::Text, ConstraintGroup::required())
//!     .param_with("user", ValueType::Object, ConstraintGroup::required(), |user| {
//!         user.param("name", ValueType::Text, ConstraintGroup::required());
//!         user.param("age", ValueType::WholeNumber, ConstraintGroup::new().min(18));
//!     });
//!
//! let rules = builder.build();
//! assert_eq!(rules.get("user").unwrap().children.len(), 2);
//! ```

use crate::rule::{ConstraintGroup, RuleNode, RuleSet, ValueType};

/// Assembles a [`RuleSet`].
///
/// The builder does not check the schema it assembles; a node may carry both
/// children and a scalar element rule, and the engine copes with it.
#[derive(Debug, Default)]
pub struct RuleBuilder {
    rules: RuleSet,
}

impl RuleBuilder {
    /// A builder with no declarations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field with one constraint group.
    ///
    /// Declaring the same name again replaces the earlier declaration.
    pub fn param(
        &mut self,
        name: impl Into<String>,
        value_type: ValueType,
        group: ConstraintGroup,
    ) -> &mut Self {
        self.rules
            .insert(RuleNode::new(name, value_type).with_constraint(group));
        self
    }

    /// Declares a field whose children are declared by `nested`.
    ///
    /// `nested` runs against its own builder; nothing it declares is visible
    /// at this level.
    pub fn param_with(
        &mut self,
        name: impl Into<String>,
        value_type: ValueType,
        group: ConstraintGroup,
        nested: impl FnOnce(&mut RuleBuilder),
    ) -> &mut Self {
        let children = RuleSet::build(nested).into_nodes();
        self.rules.insert(
            RuleNode::new(name, value_type)
                .with_constraint(group)
                .with_children(children),
        );
        self
    }

    /// Declares a prebuilt node, e.g. one with several constraint groups.
    pub fn node(&mut self, node: RuleNode) -> &mut Self {
        self.rules.insert(node);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> RuleSet {
        self.rules
    }
}
