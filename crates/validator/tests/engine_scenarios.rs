//! End-to-end validation of nested payloads.

use paramguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn paths(outcome: &Outcome) -> Vec<&str> {
    outcome.issues().iter().map(|i| i.path.as_str()).collect()
}

fn messages(outcome: &Outcome) -> Vec<&str> {
    outcome.issues().iter().map(|i| i.message.as_str()).collect()
}

fn user_rules() -> RuleSet {
    RuleSet::build(|r| {
        r.param_with("user", ValueType::Object, ConstraintGroup::required(), |u| {
            u.param("name", ValueType::Text, ConstraintGroup::required());
            u.param("age", ValueType::WholeNumber, ConstraintGroup::new().min(18));
        });
    })
}

fn users_rules() -> RuleSet {
    RuleSet::build(|r| {
        r.param_with("users", ValueType::List, ConstraintGroup::required(), |u| {
            u.param("name", ValueType::Text, ConstraintGroup::required());
            u.param("age", ValueType::WholeNumber, ConstraintGroup::new().min(18));
        });
    })
}

// ============================================================================
// NESTED OBJECTS
// ============================================================================

#[test]
fn nested_object_passes() {
    let outcome = validate(&json!({ "user": { "name": "John", "age": 25 } }), &user_rules());
    assert!(outcome.is_valid());
}

#[test]
fn nested_missing_field_uses_full_path() {
    let outcome = validate(&json!({ "user": { "age": 25 } }), &user_rules());
    assert_eq!(paths(&outcome), ["user.name"]);
    assert_eq!(messages(&outcome), ["Parameter user.name is required"]);
    assert_eq!(outcome.issues()[0].kind, IssueKind::MissingRequired);
}

#[test]
fn missing_parent_skips_children() {
    let outcome = validate(&json!({}), &user_rules());
    assert_eq!(paths(&outcome), ["user"]);
}

#[test]
fn parent_of_wrong_type_skips_children() {
    let outcome = validate(&json!({ "user": "John" }), &user_rules());
    assert_eq!(paths(&outcome), ["user"]);
    assert_eq!(messages(&outcome), ["Parameter user must be of type Object"]);
}

#[test]
fn deep_nesting_builds_dotted_paths() {
    let rules = RuleSet::build(|r| {
        r.param_with("company", ValueType::Object, ConstraintGroup::new(), |c| {
            c.param_with("address", ValueType::Object, ConstraintGroup::new(), |a| {
                a.param("city", ValueType::Text, ConstraintGroup::required());
            });
        });
    });
    let outcome = validate(&json!({ "company": { "address": {} } }), &rules);
    assert_eq!(paths(&outcome), ["company.address.city"]);
}

// ============================================================================
// LISTS
// ============================================================================

#[test]
fn list_of_objects_reports_per_index() {
    let payload = json!({
        "users": [
            { "name": "John", "age": 25 },
            { "age": 16 }
        ]
    });
    let outcome = validate(&payload, &users_rules());
    assert_eq!(paths(&outcome), ["users[1].name", "users[1].age"]);
    assert_eq!(
        messages(&outcome),
        [
            "Parameter users[1].name is required",
            "Parameter users[1].age must be at least 18",
        ]
    );
}

#[test]
fn non_object_list_items_are_skipped() {
    let payload = json!({ "users": ["John", { "name": "Jane" }, 3] });
    assert!(validate(&payload, &users_rules()).is_valid());
}

#[test]
fn empty_list_is_present_and_passes() {
    assert!(validate(&json!({ "users": [] }), &users_rules()).is_valid());
}

#[test]
fn scalar_list_element_type() {
    let rules = RuleSet::build(|r| {
        r.param(
            "tags",
            ValueType::List,
            ConstraintGroup::new().each_of(ValueType::Text),
        );
    });
    let outcome = validate(&json!({ "tags": ["a", 1] }), &rules);
    assert_eq!(paths(&outcome), ["tags[1]"]);
    assert_eq!(messages(&outcome), ["Parameter tags[1] must be of type String"]);
}

#[test]
fn scalar_list_element_constraints() {
    let element = ElementRule::new(ValueType::Text)
        .with_constraints(ConstraintGroup::new().min(2).message("Tags need two letters"));
    let rules = RuleSet::build(|r| {
        r.param("tags", ValueType::List, ConstraintGroup::new().max(3).each(element));
    });

    let outcome = validate(&json!({ "tags": ["ok", "x", "fine", "y"] }), &rules);
    assert_eq!(paths(&outcome), ["tags", "tags[1]", "tags[3]"]);
    assert_eq!(
        messages(&outcome),
        [
            "Parameter tags must be at most 3",
            "Tags need two letters",
            "Tags need two letters",
        ]
    );
}

// ============================================================================
// CONSTRAINT GROUPS
// ============================================================================

#[test]
fn groups_are_evaluated_independently() {
    let rules = RuleSet::build(|r| {
        r.node(
            RuleNode::new("age", ValueType::WholeNumber)
                .with_constraint(ConstraintGroup::new().min(18))
                .with_constraint(ConstraintGroup::new().min(21).message("Must be 21 or older")),
        );
    });

    let outcome = validate(&json!({ "age": 16 }), &rules);
    assert_eq!(
        messages(&outcome),
        ["Parameter age must be at least 18", "Must be 21 or older"]
    );

    let outcome = validate(&json!({ "age": 19 }), &rules);
    assert_eq!(messages(&outcome), ["Must be 21 or older"]);
}

#[test]
fn required_group_and_min_group_report_only_the_short_value() {
    let rules = RuleSet::build(|r| {
        r.node(
            RuleNode::new("name", ValueType::Text)
                .with_constraint(ConstraintGroup::required())
                .with_constraint(ConstraintGroup::new().min(3)),
        );
    });

    let outcome = validate(&json!({ "name": "Jo" }), &rules);
    assert_eq!(messages(&outcome), ["Parameter name must be at least 3"]);
    assert_eq!(outcome.issues()[0].kind, IssueKind::OutOfRange);

    let outcome = validate(&json!({}), &rules);
    assert_eq!(messages(&outcome), ["Parameter name is required"]);
}

#[test]
fn whole_number_bounds_past_float_precision() {
    let rules = RuleSet::build(|r| {
        r.param(
            "n",
            ValueType::WholeNumber,
            ConstraintGroup::new().max(9_007_199_254_740_992_u64),
        );
    });

    let outcome = validate(&json!({ "n": 9_007_199_254_740_993_u64 }), &rules);
    assert_eq!(messages(&outcome), ["Parameter n must be at most 9007199254740992"]);
    assert!(validate(&json!({ "n": 9_007_199_254_740_992_u64 }), &rules).is_valid());
}

#[test]
fn type_mismatch_suppresses_other_checks_in_group() {
    let rules = RuleSet::build(|r| {
        r.param(
            "age",
            ValueType::WholeNumber,
            ConstraintGroup::required().range(18, 99),
        );
    });
    let outcome = validate(&json!({ "age": "twenty" }), &rules);
    assert_eq!(messages(&outcome), ["Parameter age must be of type Integer"]);
    assert_eq!(outcome.issues()[0].kind, IssueKind::TypeMismatch);
}

#[test]
fn custom_message_overrides_every_check() {
    let rules = RuleSet::build(|r| {
        r.param(
            "handle",
            ValueType::Text,
            ConstraintGroup::required()
                .min(3)
                .format(Pattern::new(r"^[a-z]+$").unwrap())
                .message("Handle must be 3+ lowercase letters"),
        );
    });

    let outcome = validate(&json!({ "handle": "A" }), &rules);
    assert_eq!(
        messages(&outcome),
        [
            "Handle must be 3+ lowercase letters",
            "Handle must be 3+ lowercase letters",
        ]
    );

    let outcome = validate(&json!({}), &rules);
    assert_eq!(messages(&outcome), ["Handle must be 3+ lowercase letters"]);
}

#[test]
fn blank_text_is_rejected_when_disallowed() {
    let rules = RuleSet::build(|r| {
        r.param("bio", ValueType::Text, ConstraintGroup::new().not_blank());
    });
    let outcome = validate(&json!({ "bio": "   " }), &rules);
    assert_eq!(messages(&outcome), ["Parameter bio cannot be blank"]);
    assert!(validate(&json!({ "bio": " hi " }), &rules).is_valid());
}

#[rstest]
#[case::null(json!({ "name": null }))]
#[case::empty_string(json!({ "name": "" }))]
#[case::missing(json!({}))]
fn absent_values_trigger_required(#[case] payload: Value) {
    let rules = RuleSet::build(|r| {
        r.param("name", ValueType::Text, ConstraintGroup::required());
    });
    let outcome = validate(&payload, &rules);
    assert_eq!(messages(&outcome), ["Parameter name is required"]);
}

#[rstest]
#[case::null(json!({ "age": null }))]
#[case::empty_string(json!({ "age": "" }))]
#[case::missing(json!({}))]
fn absent_optional_values_pass(#[case] payload: Value) {
    let rules = RuleSet::build(|r| {
        r.param("age", ValueType::WholeNumber, ConstraintGroup::new().min(18));
    });
    assert!(validate(&payload, &rules).is_valid());
}

#[rstest]
#[case::text_min(ValueType::Text, ConstraintGroup::new().min(3), json!("ab"), "must be at least 3")]
#[case::text_max(ValueType::Text, ConstraintGroup::new().max(2), json!("abc"), "must be at most 2")]
#[case::list_min(ValueType::List, ConstraintGroup::new().min(2), json!([1]), "must be at least 2")]
#[case::decimal_max(ValueType::Decimal, ConstraintGroup::new().max(1.5), json!(2.25), "must be at most 1.5")]
#[case::integer_min(ValueType::WholeNumber, ConstraintGroup::new().min(0), json!(-1), "must be at least 0")]
fn bounds_by_type(
    #[case] value_type: ValueType,
    #[case] group: ConstraintGroup,
    #[case] value: Value,
    #[case] expected: &str,
) {
    let rules = RuleSet::build(|r| {
        r.param("field", value_type, group);
    });
    let outcome = validate(&json!({ "field": value }), &rules);
    assert_eq!(messages(&outcome), [format!("Parameter field {expected}")]);
}

#[rstest]
#[case::boolean(ValueType::Boolean, json!(true))]
#[case::date(ValueType::Date, json!("2024-01-01"))]
#[case::object(ValueType::Object, json!({ "a": 1 }))]
fn bounds_ignored_for_unmeasured_types(#[case] value_type: ValueType, #[case] value: Value) {
    let rules = RuleSet::build(|r| {
        r.param("field", value_type, ConstraintGroup::new().range(100, 200));
    });
    assert!(validate(&json!({ "field": value }), &rules).is_valid());
}

#[rstest]
#[case::string(ValueType::Text, json!(12), "String")]
#[case::integer(ValueType::WholeNumber, json!(1.5), "Integer")]
#[case::decimal(ValueType::Decimal, json!("1.5"), "Decimal")]
#[case::boolean(ValueType::Boolean, json!("true"), "Boolean")]
#[case::date(ValueType::Date, json!("01/02/2024"), "Date")]
#[case::timestamp(ValueType::Timestamp, json!("yesterday"), "Timestamp")]
#[case::object(ValueType::Object, json!([1]), "Object")]
#[case::list(ValueType::List, json!({ "a": 1 }), "List")]
fn type_mismatch_names_the_type(
    #[case] value_type: ValueType,
    #[case] value: Value,
    #[case] name: &str,
) {
    let rules = RuleSet::build(|r| {
        r.param("field", value_type, ConstraintGroup::new());
    });
    let outcome = validate(&json!({ "field": value }), &rules);
    assert_eq!(
        messages(&outcome),
        [format!("Parameter field must be of type {name}")]
    );
}

// ============================================================================
// RULE SETS AND PAYLOADS
// ============================================================================

#[test]
fn empty_rules_yield_no_rules() {
    let outcome = validate(&json!({ "anything": 1 }), &RuleSet::new());
    assert!(outcome.is_no_rules());
    assert!(outcome.into_first_error().is_ok());

    let outcome = validate(&json!({}), None);
    assert_eq!(outcome, Outcome::NoRules);
}

#[test]
fn issues_follow_declaration_order() {
    let rules = RuleSet::build(|r| {
        r.param("zeta", ValueType::Text, ConstraintGroup::required());
        r.param("alpha", ValueType::Text, ConstraintGroup::required());
        r.param("mid", ValueType::Text, ConstraintGroup::required());
    });
    let outcome = validate(&json!({}), &rules);
    assert_eq!(paths(&outcome), ["zeta", "alpha", "mid"]);
}

#[test]
fn non_object_payload_reads_every_field_as_missing() {
    let outcome = validate(&json!([1, 2, 3]), &user_rules());
    assert_eq!(paths(&outcome), ["user"]);
}

#[test]
fn undeclared_keys_are_ignored() {
    let payload = json!({ "user": { "name": "John", "admin": true }, "extra": [1] });
    assert!(validate(&payload, &user_rules()).is_valid());
}

#[test]
fn payload_is_not_modified() {
    let payload = json!({ "users": [{ "age": 16 }] });
    let before = payload.clone();
    let _ = validate(&payload, &users_rules());
    assert_eq!(payload, before);
}

#[test]
fn maps_validate_like_json_objects() {
    let mut params = std::collections::HashMap::new();
    params.insert("user".to_string(), json!({ "age": 25 }));
    let outcome = validate(&params, &user_rules());
    assert_eq!(paths(&outcome), ["user.name"]);
}

// ============================================================================
// ESCALATION
// ============================================================================

#[test]
fn first_error_carries_field_status_and_message() {
    let error = validate(&json!({ "user": {} }), &user_rules())
        .into_first_error()
        .unwrap_err();
    assert_eq!(error.field, "user.name");
    assert_eq!(error.status, Status::Unprocessable);
    assert_eq!(error.message, "Parameter user.name is required");
    assert_eq!(error.to_json_value()["status"], "unprocessable_entity");
}

#[test]
fn validator_escalates_with_configured_status() {
    let rules = users_rules();
    let config = ValidatorConfig::default()
        .with_surfacing(Surfacing::All)
        .with_status(Status::BadRequest);
    let validator = Validator::new(&rules).with_config(config);

    let rejection = validator
        .check(&json!({ "users": [{ "age": 1 }] }))
        .unwrap_err();
    assert_eq!(rejection.status(), Status::BadRequest);
    let fields: Vec<_> = rejection.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["users[0].name", "users[0].age"]);

    assert!(validator.check(&json!({ "users": [{ "name": "Ann" }] })).is_ok());
}

#[test]
fn rule_set_is_shared_across_threads() {
    let rules = users_rules();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let rules = &rules;
                scope.spawn(move || {
                    let payload = json!({ "users": [{ "name": "x", "age": 10 + i }] });
                    validate(&payload, rules).issues().len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    });
}
