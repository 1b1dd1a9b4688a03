//! Recursive traversal of a payload against a rule tree

use serde_json::{Map, Value};

use crate::foundation::{FieldIssue, FieldPath, IssueKind};
use crate::rule::{Bound, ConstraintGroup, RuleNode, ValueType};

/// Per-run accumulator. One is created for every `validate` call and
/// dropped when the run returns its report.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    issues: Vec<FieldIssue>,
}

impl Walk {
    pub(crate) fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// Visits `nodes` in order against `container`.
    ///
    /// `container` is `None` when the value at this level is not an object;
    /// every field then reads as missing.
    pub(crate) fn visit<'r>(
        &mut self,
        nodes: impl IntoIterator<Item = &'r RuleNode>,
        container: Option<&Map<String, Value>>,
        prefix: &FieldPath,
    ) {
        for node in nodes {
            self.visit_node(node, container, prefix);
        }
    }

    fn visit_node(
        &mut self,
        node: &RuleNode,
        container: Option<&Map<String, Value>>,
        prefix: &FieldPath,
    ) {
        if !node.is_well_formed() {
            tracing::trace!(path = %prefix, "skipping rule without field");
            return;
        }

        let path = prefix.key(node.field.as_str());
        let present = container
            .and_then(|c| c.get(&node.field))
            .filter(|value| !is_absent(value));

        for group in &node.constraints {
            self.check_group(node, group, &path, present);
        }

        if node.children.is_empty() {
            return;
        }
        match present {
            Some(Value::Object(object)) => self.visit(&node.children, Some(object), &path),
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if let Value::Object(object) = item {
                        self.visit(&node.children, Some(object), &path.index(index));
                    }
                }
            }
            _ => {}
        }
    }

    fn check_group(
        &mut self,
        node: &RuleNode,
        group: &ConstraintGroup,
        path: &FieldPath,
        present: Option<&Value>,
    ) {
        let label = path.to_string();

        let Some(value) = present else {
            if group.required {
                self.record(&label, IssueKind::MissingRequired, group, || {
                    format!("Parameter {label} is required")
                });
            }
            return;
        };

        if !node.value_type.matches(value) {
            self.record(&label, IssueKind::TypeMismatch, group, || {
                format!("Parameter {label} must be of type {}", node.value_type)
            });
            return;
        }

        self.check_value(&label, node.value_type, value, group);

        if let (Some(element), Value::Array(items)) = (&group.element, value) {
            for (index, item) in items.iter().enumerate() {
                let label = path.index(index).to_string();
                let checks = &element.constraints;
                if element.value_type.matches(item) {
                    self.check_value(&label, element.value_type, item, checks);
                } else {
                    self.record(&label, IssueKind::TypeMismatch, checks, || {
                        format!("Parameter {label} must be of type {}", element.value_type)
                    });
                }
            }
        }
    }

    /// Bound, format and blank checks. Each one records on its own.
    fn check_value(
        &mut self,
        label: &str,
        value_type: ValueType,
        value: &Value,
        group: &ConstraintGroup,
    ) {
        let measure = measure(value_type, value);

        if let (Some(min), Some(actual)) = (group.min, measure)
            && actual < min
        {
            self.record(label, IssueKind::OutOfRange, group, || {
                format!("Parameter {label} must be at least {min}")
            });
        }

        if let (Some(max), Some(actual)) = (group.max, measure)
            && actual > max
        {
            self.record(label, IssueKind::OutOfRange, group, || {
                format!("Parameter {label} must be at most {max}")
            });
        }

        if let (Some(pattern), Some(text)) = (&group.format, value.as_str())
            && !pattern.is_match(text)
        {
            self.record(label, IssueKind::FormatMismatch, group, || {
                format!("Parameter {label} format is invalid")
            });
        }

        if group.blank_disallowed && value.as_str().is_some_and(|text| text.trim().is_empty()) {
            self.record(label, IssueKind::BlankDisallowed, group, || {
                format!("Parameter {label} cannot be blank")
            });
        }
    }

    fn record(
        &mut self,
        label: &str,
        kind: IssueKind,
        group: &ConstraintGroup,
        default_message: impl FnOnce() -> String,
    ) {
        let message = group.message.clone().unwrap_or_else(default_message);
        self.issues.push(FieldIssue::new(label, kind, message));
    }
}

/// Missing keys are filtered before this; `null` and `""` also read as absent.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// The quantity `min`/`max` compare against, if bounds apply to this type.
fn measure(value_type: ValueType, value: &Value) -> Option<Bound> {
    match (value_type, value) {
        (numeric, Value::Number(number)) if numeric.is_numeric() => Bound::from_number(number),
        (ValueType::Text, Value::String(text)) => Some(Bound::from(text.chars().count() as u64)),
        (ValueType::List, Value::Array(items)) => Some(Bound::from(items.len() as u64)),
        _ => None,
    }
}
