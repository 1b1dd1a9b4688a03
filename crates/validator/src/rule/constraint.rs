//! Constraint groups
//!
//! A field carries an ordered list of [`ConstraintGroup`]s. Each group is
//! evaluated on its own: a group that fails `required` does not stop the
//! next group from running, and a single group can record several issues
//! (for example both `min` and `format`).

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::rule::{RuleError, ValueType};

// ============================================================================
// PATTERN
// ============================================================================

/// A compiled `format` pattern.
///
/// Compares and serializes by its source text.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compiles a pattern.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Returns true if the pattern matches anywhere in `input`.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.0.is_match(input)
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = RuleError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

/// Written in `/…/` literal form so that reading it back strips exactly the
/// delimiters added here.
impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("/{}/", self.as_str()))
    }
}

// ============================================================================
// BOUND
// ============================================================================

/// A `min` or `max` limit, or the measured quantity it is compared with.
///
/// Two whole numbers compare exactly. Any comparison involving a fractional
/// value goes through `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Bound {
    /// An integer, wide enough for every `i64` and `u64`.
    Whole(i128),
    /// Any other number.
    Fractional(f64),
}

impl Bound {
    /// Reads a JSON number, keeping integers exact.
    #[must_use]
    pub fn from_number(number: &Number) -> Option<Self> {
        if let Some(value) = number.as_i64() {
            Some(Self::Whole(value.into()))
        } else if let Some(value) = number.as_u64() {
            Some(Self::Whole(value.into()))
        } else {
            number.as_f64().map(Self::Fractional)
        }
    }

    /// The bound as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(value) => value as f64,
            Self::Fractional(value) => value,
        }
    }
}

macro_rules! whole_bound_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bound {
                fn from(value: $ty) -> Self {
                    Self::Whole(value.into())
                }
            }
        )*
    };
}

whole_bound_from!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for Bound {
    fn from(value: f32) -> Self {
        Self::Fractional(value.into())
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::Fractional(value)
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Whole(a), Self::Whole(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Integral floats print without a fractional part (`18`, not `18.0`).
impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Whole(value) => write!(f, "{value}"),
            Self::Fractional(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", value as i64)
            }
            Self::Fractional(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Whole(value) => {
                if let Ok(value) = i64::try_from(value) {
                    serializer.serialize_i64(value)
                } else if let Ok(value) = u64::try_from(value) {
                    serializer.serialize_u64(value)
                } else {
                    serializer.serialize_i128(value)
                }
            }
            Self::Fractional(value) => serializer.serialize_f64(value),
        }
    }
}

// ============================================================================
// CONSTRAINT GROUP
// ============================================================================

/// One independent bundle of checks on a field.
///
/// # Examples
///
/// ```
/// use paramguard_validator::rule::{ConstraintGroup, Pattern};
///
/// let group = ConstraintGroup::required()
///     .min(3)
///     .format(Pattern::new(r"^[a-z]+$").unwrap())
///     .message("Handle must be 3+ lowercase letters");
/// assert!(group.required);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstraintGroup {
    /// Absent values (missing, null, empty string) are rejected.
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    /// Replaces every default message produced by this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Lower bound: numeric value, or length for text and lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound>,
    /// Upper bound: numeric value, or length for text and lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound>,
    /// Pattern a text value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Pattern>,
    /// Whitespace-only text is rejected.
    #[serde(skip_serializing_if = "is_false")]
    pub blank_disallowed: bool,
    /// Type and constraints every element of a list must satisfy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Box<ElementRule>>,
}

impl ConstraintGroup {
    /// An empty group: optional, unconstrained.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A group that only marks the field as required.
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Sets whether the field is required.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Overrides the messages of this group.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<Bound>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<Bound>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Sets both bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn range(self, min: impl Into<Bound>, max: impl Into<Bound>) -> Self {
        self.min(min).max(max)
    }

    /// Sets the text pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, pattern: impl Into<Pattern>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    /// Rejects whitespace-only text.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_blank(mut self) -> Self {
        self.blank_disallowed = true;
        self
    }

    /// Requires every list element to satisfy `element`.
    #[must_use = "builder methods must be chained or built"]
    pub fn each(mut self, element: ElementRule) -> Self {
        self.element = Some(Box::new(element));
        self
    }

    /// Shorthand for [`each`](Self::each) with an unconstrained element type.
    #[must_use = "builder methods must be chained or built"]
    pub fn each_of(self, value_type: ValueType) -> Self {
        self.each(ElementRule::new(value_type))
    }
}

// ============================================================================
// ELEMENT RULE
// ============================================================================

/// Element contract for a scalar list.
///
/// Only `message`, `min`, `max`, `format` and `blank_disallowed` of the
/// nested group apply to elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRule {
    /// Type every element must have.
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Checks applied to each element that has the right type.
    #[serde(flatten)]
    pub constraints: ConstraintGroup,
}

impl ElementRule {
    /// Elements of `value_type` with no further checks.
    #[must_use]
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            constraints: ConstraintGroup::default(),
        }
    }

    /// Sets the element checks.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_constraints(mut self, constraints: ConstraintGroup) -> Self {
        self.constraints = constraints;
        self
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}
