//! Ordered rule sets

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::builder::RuleBuilder;
use crate::rule::RuleNode;

/// Ordered mapping of field name to [`RuleNode`].
///
/// Iteration follows declaration order, which fixes the order issues are
/// reported in. Inserting a node for an existing field replaces it in place.
///
/// # Examples
///
/// ```
/// use paramguard_validator::rule::{ConstraintGroup, RuleSet, ValueType};
///
/// let rules = RuleSet::build(|r| {
///     r.param("name", ValueType::Text, ConstraintGroup::required());
///     r.param("age", ValueType::WholeNumber, ConstraintGroup::new().min(18));
/// });
/// assert_eq!(rules.fields().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    nodes: IndexMap<String, RuleNode>,
}

impl RuleSet {
    /// An empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `declare` against a fresh [`RuleBuilder`] and returns the result.
    pub fn build(declare: impl FnOnce(&mut RuleBuilder)) -> Self {
        let mut builder = RuleBuilder::new();
        declare(&mut builder);
        builder.build()
    }

    /// Collects hand-assembled nodes; later nodes replace earlier ones with
    /// the same field.
    pub fn from_nodes(nodes: impl IntoIterator<Item = RuleNode>) -> Self {
        nodes.into_iter().collect()
    }

    /// Inserts a node, returning the one it replaced.
    pub fn insert(&mut self, node: RuleNode) -> Option<RuleNode> {
        self.nodes.insert(node.field.clone(), node)
    }

    /// Looks up the node declared for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RuleNode> {
        self.nodes.get(field)
    }

    /// Nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleNode> {
        self.nodes.values()
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the set, returning nodes in declaration order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<RuleNode> {
        self.nodes.into_values().collect()
    }
}

impl FromIterator<RuleNode> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleNode>>(iter: I) -> Self {
        let mut set = Self::new();
        for node in iter {
            set.insert(node);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleNode;
    type IntoIter = indexmap::map::Values<'a, String, RuleNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.nodes.values())
    }
}
