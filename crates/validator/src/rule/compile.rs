//! Compiling hand-assembled rule descriptions
//!
//! Some producers skip the builder and write rules as plain data:
//!
//! ```json
//! [
//!   { "field": "user", "type": "hash", "opts": [{ "required": true }],
//!     "items": [ { "field": "name", "type": "string", "opts": [{ "required": true }] } ] }
//! ]
//! ```
//!
//! A top-level object is accepted as well; its keys are ignored and its
//! values are read in order. Compilation is lenient: entries that are not
//! objects, lack `field` or `type`, carry an unknown type tag or an invalid
//! pattern are dropped without failing the whole set.

use serde_json::{Map, Value};

use crate::rule::{
    Bound, ConstraintGroup, ElementRule, Pattern, RuleError, RuleNode, RuleSet, ValueType,
};

impl RuleSet {
    /// Compiles a rule description, dropping malformed entries.
    ///
    /// Anything other than an array or object yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramguard_validator::rule::RuleSet;
    /// use serde_json::json;
    ///
    /// let rules = RuleSet::from_json(&json!({
    ///     "name_validate": { "field": "name", "type": "String", "opts": [{ "required": true }] },
    ///     "broken": { "field": "age" }
    /// }));
    /// assert_eq!(rules.len(), 1);
    /// ```
    pub fn from_json(description: &Value) -> Self {
        match description {
            Value::Array(entries) => compile_entries(entries.iter()).into_iter().collect(),
            Value::Object(entries) => compile_entries(entries.values()).into_iter().collect(),
            other => {
                tracing::debug!(kind = json_kind(other), "rule description is not a list or map");
                Self::new()
            }
        }
    }

    /// Parses and compiles a rule description.
    ///
    /// Fails only when `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, RuleError> {
        let description: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&description))
    }
}

fn compile_entries<'a>(entries: impl Iterator<Item = &'a Value>) -> Vec<RuleNode> {
    entries
        .enumerate()
        .filter_map(|(position, entry)| match compile_node(entry) {
            Ok(node) => node,
            Err(error) => {
                tracing::warn!(position, %error, "dropping rule entry");
                None
            }
        })
        .collect()
}

/// `Ok(None)` for structurally incomplete entries, `Err` for entries whose
/// content cannot be compiled.
fn compile_node(entry: &Value) -> Result<Option<RuleNode>, RuleError> {
    let Some(entry) = entry.as_object() else {
        tracing::trace!("skipping non-object rule entry");
        return Ok(None);
    };

    let field = match entry.get("field").and_then(Value::as_str) {
        Some(field) if !field.is_empty() => field,
        _ => {
            tracing::trace!("skipping rule entry without field");
            return Ok(None);
        }
    };
    let Some(tag) = entry.get("type").and_then(Value::as_str) else {
        tracing::trace!(field, "skipping rule entry without type");
        return Ok(None);
    };
    let value_type: ValueType = tag.parse()?;

    let constraints = match entry.get("opts") {
        Some(Value::Array(groups)) => groups
            .iter()
            .filter_map(Value::as_object)
            .map(compile_group)
            .collect::<Result<Vec<_>, _>>()?,
        Some(Value::Object(group)) => vec![compile_group(group)?],
        _ => Vec::new(),
    };

    let children = match entry.get("items") {
        Some(Value::Array(items)) => compile_entries(items.iter()),
        _ => Vec::new(),
    };

    Ok(Some(
        RuleNode::new(field, value_type)
            .with_constraints(constraints)
            .with_children(children),
    ))
}

fn compile_group(group: &Map<String, Value>) -> Result<ConstraintGroup, RuleError> {
    let mut compiled = ConstraintGroup::new()
        .with_required(group.get("required").and_then(Value::as_bool).unwrap_or(false));

    if let Some(message) = group.get("message").and_then(Value::as_str) {
        compiled = compiled.message(message);
    }
    if let Some(min) = group.get("min").and_then(Value::as_number).and_then(Bound::from_number) {
        compiled = compiled.min(min);
    }
    if let Some(max) = group.get("max").and_then(Value::as_number).and_then(Bound::from_number) {
        compiled = compiled.max(max);
    }
    if let Some(format) = group.get("format").and_then(Value::as_str) {
        compiled = compiled.format(Pattern::new(strip_slashes(format))?);
    }
    if group.get("blank").and_then(Value::as_bool) == Some(false)
        || group.get("blank_disallowed").and_then(Value::as_bool) == Some(true)
    {
        compiled = compiled.not_blank();
    }
    if let Some(element) = group.get("element").and_then(Value::as_object) {
        compiled = compiled.each(compile_element(element)?);
    }

    Ok(compiled)
}

fn compile_element(element: &Map<String, Value>) -> Result<ElementRule, RuleError> {
    let tag = element
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| RuleError::UnknownType(String::new()))?;
    let value_type: ValueType = tag.parse()?;
    Ok(ElementRule::new(value_type).with_constraints(compile_group(element)?))
}

/// Accepts `/pattern/` as written in regex-literal syntax. Exactly one pair
/// of delimiters is removed, matching what [`Pattern`] serializes to.
fn strip_slashes(pattern: &str) -> &str {
    pattern
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .unwrap_or(pattern)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
