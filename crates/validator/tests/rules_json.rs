//! Compiling rule descriptions from JSON.

use paramguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn compiled_rules_validate_like_built_ones() {
    let rules = RuleSet::from_json(&json!([
        {
            "field": "users",
            "type": "Array",
            "opts": [{ "required": true }],
            "items": [
                { "field": "name", "type": "String", "opts": [{ "required": true }] },
                { "field": "age", "type": "Integer", "opts": [{ "min": 18 }] }
            ]
        }
    ]));

    let outcome = validate(&json!({ "users": [{ "name": "Jo", "age": 30 }, { "age": 16 }] }), &rules);
    let paths: Vec<_> = outcome.issues().iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, ["users[1].name", "users[1].age"]);
}

#[test]
fn keyed_descriptions_keep_value_order() {
    let rules = RuleSet::from_json(&json!({
        "b_rule": { "field": "email", "type": "string", "opts": { "required": true } },
        "a_rule": { "field": "name", "type": "string", "opts": { "required": true } }
    }));
    assert_eq!(rules.fields().collect::<Vec<_>>(), ["email", "name"]);
}

#[test]
fn malformed_entries_are_dropped() {
    let rules = RuleSet::from_json(&json!([
        "not an entry",
        { "type": "string" },
        { "field": "", "type": "string" },
        { "field": "age" },
        { "field": "mood", "type": "Symbol" },
        { "field": "code", "type": "string", "opts": [{ "format": "([" }] },
        { "field": "name", "type": "string" }
    ]));
    assert_eq!(rules.fields().collect::<Vec<_>>(), ["name"]);
}

#[test]
fn non_container_description_is_empty() {
    assert!(RuleSet::from_json(&json!("rules")).is_empty());
    assert!(RuleSet::from_json(&json!(null)).is_empty());
}

#[test]
fn invalid_json_text_is_an_error() {
    let err = RuleSet::from_json_str("[{").unwrap_err();
    assert!(matches!(err, RuleError::Json(_)));
}

#[test]
fn group_keys_are_compiled() {
    let rules = RuleSet::from_json_str(
        r#"[{
            "field": "handle",
            "type": "string",
            "opts": [
                { "required": true, "message": "Bad handle", "format": "/^[a-z]+$/" },
                { "min": 2, "max": 8, "blank": false }
            ]
        }]"#,
    )
    .unwrap();

    let node = rules.get("handle").unwrap();
    assert_eq!(node.constraints.len(), 2);
    assert!(node.is_required());
    assert_eq!(node.constraints[0].message.as_deref(), Some("Bad handle"));
    assert_eq!(node.constraints[0].format.as_ref().unwrap().as_str(), "^[a-z]+$");
    assert_eq!(node.constraints[1].min, Some(Bound::Whole(2)));
    assert_eq!(node.constraints[1].max, Some(Bound::Whole(8)));
    assert!(node.constraints[1].blank_disallowed);

    let outcome = validate(&json!({ "handle": "ABC" }), &rules);
    let messages: Vec<_> = outcome.issues().iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages, ["Bad handle"]);
}

#[test]
fn element_rules_are_compiled() {
    let rules = RuleSet::from_json(&json!([{
        "field": "scores",
        "type": "list",
        "opts": [{ "element": { "type": "integer", "min": 0, "max": 10 } }]
    }]));

    let outcome = validate(&json!({ "scores": [3, 11, "x"] }), &rules);
    let messages: Vec<_> = outcome.issues().iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Parameter scores[1] must be at most 10",
            "Parameter scores[2] must be of type Integer",
        ]
    );
}

#[test]
fn serialized_rules_compile_back() {
    let rules = RuleSet::build(|r| {
        r.param_with("user", ValueType::Object, ConstraintGroup::required(), |u| {
            u.param(
                "email",
                ValueType::Text,
                ConstraintGroup::required().format(Pattern::new(r"^\S+@\S+$").unwrap()),
            );
            u.param(
                "tags",
                ValueType::List,
                ConstraintGroup::new().max(5).each_of(ValueType::Text),
            );
        });
    });

    let text = serde_json::to_string(&rules).unwrap();
    let recompiled = RuleSet::from_json_str(&text).unwrap();
    assert_eq!(recompiled, rules);
}

#[test]
fn slash_delimited_patterns_compile_back_unchanged() {
    let rules = RuleSet::build(|r| {
        r.param(
            "route",
            ValueType::Text,
            ConstraintGroup::new().format(Pattern::new("/api/").unwrap()),
        );
    });

    let recompiled = RuleSet::from_json_str(&serde_json::to_string(&rules).unwrap()).unwrap();
    assert_eq!(recompiled, rules);

    for payload in [json!({ "route": "api" }), json!({ "route": "/v1/api/x" })] {
        assert_eq!(
            validate(&payload, &recompiled).issues().len(),
            validate(&payload, &rules).issues().len()
        );
    }
    assert!(validate(&json!({ "route": "/api/" }), &recompiled).is_valid());
    assert!(!validate(&json!({ "route": "api" }), &recompiled).is_valid());
}
