//! Unit tests for the rule-table engine and the resource rule sets


use super::*;
use serde_json::{json, Value};

const RULES: &[FieldConstraint] = &[
    FieldConstraint::required(
        Location::Body,
        "name",
        "Name is required",
        Check::NonEmptyString { max: 5 },
        "Name too long",
    ),
    FieldConstraint::optional(Location::Body, "tags", Check::Array, "Tags must be an array"),
    FieldConstraint::optional(
        Location::Query,
        "page",
        Check::Integer { min: Some(1), max: None },
        "Bad page",
    ),
];

#[test]
fn test_missing_required_field_reports_once() {
    let errors = evaluate(RULES, &RequestInput::new().with_body(json!({})));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0], FieldError::new("name", "Name is required"));
}

#[test]
fn test_blank_string_counts_as_missing() {
    let errors = evaluate(RULES, &RequestInput::new().with_body(json!({ "name": "   " })));
    assert_eq!(errors.errors()[0].message, "Name is required");
}

#[test]
fn test_all_violations_are_collected() {
    let input = RequestInput::new()
        .with_body(json!({ "name": "too long", "tags": "a,b" }))
        .with_query([("page", "0")]);
    let errors = evaluate(RULES, &input);

    let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "tags", "page"]);
}

#[test]
fn test_optional_null_is_skipped() {
    let input = RequestInput::new().with_body(json!({ "name": "ok", "tags": null }));
    assert!(evaluate(RULES, &input).is_empty());
}

#[test]
fn test_query_integers_accept_text_but_body_does_not() {
    let query = RequestInput::new()
        .with_body(json!({ "name": "ok" }))
        .with_query([("page", "2")]);
    assert!(evaluate(RULES, &query).is_empty());

    let body_rule = [FieldConstraint::optional(
        Location::Body,
        "stock",
        Check::Integer { min: Some(0), max: None },
        "Bad stock",
    )];
    let errors = evaluate(&body_rule, &RequestInput::new().with_body(json!({ "stock": "3" })));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_nested_body_lookup() {
    let input = RequestInput::new().with_body(json!({ "images": [{ "url": "nope" }] }));
    let value = input.lookup(Location::Body, "images.0.url");
    assert_eq!(value, Some(&json!("nope")));
    assert_eq!(input.lookup(Location::Body, "images.1.url"), None);
}

#[test]
fn test_non_object_body_reports_required_fields() {
    let errors = evaluate(RULES, &RequestInput::new().with_body(json!([1, 2])));
    assert!(errors.has_field("name"));
}

#[test]
fn test_evaluate_all_keeps_rule_set_order() {
    let first: &[FieldConstraint] = &[FieldConstraint::required(
        Location::Path,
        "id",
        "ID is required",
        Check::ObjectId,
        "Invalid ID format",
    )];
    let input = RequestInput::new()
        .with_path([("id", "xyz")])
        .with_body(json!({}));
    let errors = evaluate_all(&[first, RULES], &input);

    assert_eq!(errors.errors()[0].field, "id");
    assert_eq!(errors.errors()[1].field, "name");
}

#[test]
fn test_relaxed_constraint() {
    let rule = RULES[0].relaxed();
    assert!(!rule.is_optional());
    assert_eq!(rule.presence, Presence::NotBlank("Name is required"));
    assert!(evaluate(&[rule], &RequestInput::new().with_body(json!({}))).is_empty());
    assert_eq!(RULES[1].relaxed(), RULES[1]);
}

#[test]
fn test_relaxed_constraint_rejects_blank_values() {
    let rule = RULES[0].relaxed();

    for blank in [json!("   "), json!(""), Value::Null] {
        let errors = evaluate(&[rule], &RequestInput::new().with_body(json!({ "name": blank })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0], FieldError::new("name", "Name is required"));
    }
}

#[test]
fn test_body_integer_rejects_float_literals() {
    let rule = FieldConstraint::optional(
        Location::Body,
        "stock",
        Check::Integer { min: Some(0), max: None },
        "Bad stock",
    );

    let errors = evaluate(&[rule], &RequestInput::new().with_body(json!({ "stock": 4.0 })));
    assert_eq!(errors.errors()[0].message, "Bad stock");
    assert!(evaluate(&[rule], &RequestInput::new().with_body(json!({ "stock": 4 }))).is_empty());

    let input = RequestInput::new()
        .with_body(json!({ "name": "ok" }))
        .with_query([("page", "4")]);
    assert!(evaluate(RULES, &input).is_empty());
}
