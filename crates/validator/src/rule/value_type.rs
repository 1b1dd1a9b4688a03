//! The closed set of semantic value types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::rule::RuleError;

/// Semantic type a field value must have.
///
/// Loose type tags from hand-written rule descriptions are resolved into
/// this enum once, when the rule is compiled (see [`FromStr`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// JSON string.
    Text,
    /// JSON integer.
    WholeNumber,
    /// Any JSON number; integers are accepted.
    Decimal,
    /// JSON boolean.
    Boolean,
    /// String in `YYYY-MM-DD` form.
    Date,
    /// String in RFC 3339 or `YYYY-MM-DD HH:MM:SS` form.
    Timestamp,
    /// JSON object.
    Object,
    /// JSON array.
    List,
}

impl ValueType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Text,
        Self::WholeNumber,
        Self::Decimal,
        Self::Boolean,
        Self::Date,
        Self::Timestamp,
        Self::Object,
        Self::List,
    ];

    /// Returns true if `value` has this type.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::WholeNumber => value.is_i64() || value.is_u64(),
            Self::Decimal => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Date => value.as_str().is_some_and(is_date),
            Self::Timestamp => value.as_str().is_some_and(is_timestamp),
            Self::Object => value.is_object(),
            Self::List => value.is_array(),
        }
    }

    /// Display name used in default messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::WholeNumber => "Integer",
            Self::Decimal => "Decimal",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Timestamp => "Timestamp",
            Self::Object => "Object",
            Self::List => "List",
        }
    }

    /// Canonical tag used when a rule set is serialized.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::WholeNumber => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Object => "object",
            Self::List => "list",
        }
    }

    /// True for types whose `min`/`max` compare numerically.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::WholeNumber | Self::Decimal)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "text" | "str" => Ok(Self::Text),
            "integer" | "int" | "whole_number" => Ok(Self::WholeNumber),
            "float" | "decimal" | "number" | "bigdecimal" => Ok(Self::Decimal),
            "boolean" | "bool" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "datetime" | "time" | "timestamp" => Ok(Self::Timestamp),
            "hash" | "object" | "map" => Ok(Self::Object),
            "array" | "list" => Ok(Self::List),
            _ => Err(RuleError::UnknownType(s.to_string())),
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

fn is_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn is_timestamp(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
}
