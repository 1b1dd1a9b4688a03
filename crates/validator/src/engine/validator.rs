//! The validation entry points

use crate::config::ValidatorConfig;
use crate::engine::outcome::{Outcome, Rejection, Report};
use crate::engine::walk::Walk;
use crate::foundation::FieldPath;
use crate::params::ParameterBag;
use crate::rule::RuleSet;

/// Validates payloads against a borrowed [`RuleSet`].
///
/// A validator holds no per-run state; one instance can serve any number of
/// payloads, from any number of threads.
///
/// # Examples
///
/// ```
/// use paramguard_validator::engine::Validator;
/// use paramguard_validator::rule::{ConstraintGroup, RuleSet, ValueType};
/// use serde_json::json;
///
/// let rules = RuleSet::build(|r| {
///     r.param_with("user", ValueType::Object, ConstraintGroup::required(), |u| {
///         u.param("name", ValueType::Text, ConstraintGroup::required());
///     });
/// });
///
/// let outcome = Validator::new(&rules).validate(&json!({ "user": { "age": 25 } }));
/// assert_eq!(outcome.issues()[0].path, "user.name");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    rules: &'r RuleSet,
    config: ValidatorConfig,
}

impl<'r> Validator<'r> {
    /// A validator with the default [`ValidatorConfig`].
    #[must_use]
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            config: ValidatorConfig::default(),
        }
    }

    /// Replaces the escalation settings used by [`check`](Self::check).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The rules this validator applies.
    #[must_use]
    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// The escalation settings.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Collects every issue in `payload`.
    #[must_use = "the outcome reports whether the payload conforms"]
    pub fn validate<P>(&self, payload: &P) -> Outcome
    where
        P: ParameterBag + ?Sized,
    {
        validate(payload, self.rules)
    }

    /// Validates and escalates according to the configured surfacing mode.
    pub fn check<P>(&self, payload: &P) -> Result<(), Rejection>
    where
        P: ParameterBag + ?Sized,
    {
        self.validate(payload)
            .escalate(self.config.surfacing, self.config.status)
    }
}

/// Validates `payload` against `rules`.
///
/// Empty or absent rules give [`Outcome::NoRules`] without looking at the
/// payload. The payload is never modified.
#[must_use = "the outcome reports whether the payload conforms"]
pub fn validate<'r, P>(payload: &P, rules: impl Into<Option<&'r RuleSet>>) -> Outcome
where
    P: ParameterBag + ?Sized,
{
    let rules = match rules.into() {
        Some(rules) if !rules.is_empty() => rules,
        _ => {
            tracing::debug!("no rules to validate against");
            return Outcome::NoRules;
        }
    };

    let object = payload.to_object();
    if object.is_none() {
        tracing::debug!("payload is not a keyed container; treating every field as missing");
    }

    let mut walk = Walk::default();
    walk.visit(rules, object.as_deref(), &FieldPath::root());
    let issues = walk.into_issues();

    tracing::debug!(
        fields = rules.len(),
        issues = issues.len(),
        "validation finished"
    );
    Outcome::Checked(Report::new(issues))
}
