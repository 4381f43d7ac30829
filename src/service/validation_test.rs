//! Tests for payload validation.

use serde_json::json;

use super::ServiceError;
use super::validation::*;

fn valid_user() -> serde_json::Value {
    json!({
        "userid": "bc",
        "first_name": "Bumbleywump",
        "last_name": "Cucumberpatch",
        "groups": ["admins", "developers"]
    })
}

fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, ServiceError>) -> String {
    match result {
        Err(ServiceError::Validation { message }) => message,
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn valid_user_parses() {
    let payload = validate_user(&valid_user()).expect("Valid user should pass");

    assert_eq!(payload.userid, "bc");
    assert_eq!(payload.groups, vec!["admins", "developers"]);
}

#[test]
fn user_with_misspelled_fields_is_rejected() {
    let data = json!({
        "userid": "bc",
        "first_eman": "Bumbleywump",
        "last_eman": "Cucumberpatch",
        "groups": ["admins", "developers"]
    });

    assert_validation_error(validate_user(&data));
}

#[test]
fn user_missing_groups_is_rejected() {
    let data = json!({
        "userid": "bc",
        "first_name": "Bumbleywump",
        "last_name": "Cucumberpatch"
    });

    let message = assert_validation_error(validate_user(&data));
    assert!(message.contains("groups"), "message was: {message}");
}

#[test]
fn user_with_extra_field_is_rejected() {
    let mut data = valid_user();
    data["email"] = json!("bc@example.com");

    assert_validation_error(validate_user(&data));
}

#[test]
fn user_with_wrong_types_is_rejected() {
    let mut data = valid_user();
    data["groups"] = json!("admins");
    assert_validation_error(validate_user(&data));

    let mut data = valid_user();
    data["first_name"] = json!(null);
    assert_validation_error(validate_user(&data));
}

#[test]
fn non_object_body_is_rejected() {
    assert_validation_error(validate_user(&json!(["bc"])));
    assert_validation_error(validate_group(&json!("admins")));
}

#[test]
fn names_are_bounded_to_35_characters() {
    let mut data = valid_user();
    data["first_name"] = json!("a".repeat(NAME_LENGTH));
    assert!(validate_user(&data).is_ok());

    data["first_name"] = json!("a".repeat(NAME_LENGTH + 1));
    let message = assert_validation_error(validate_user(&data));
    assert!(message.contains("first_name"), "message was: {message}");
}

#[test]
fn length_counts_characters_not_bytes() {
    let mut data = valid_user();
    data["last_name"] = json!("é".repeat(NAME_LENGTH));

    assert!(validate_user(&data).is_ok());
}

#[test]
fn groups_are_bounded_to_50_items() {
    let groups: Vec<String> = (0..MAX_MEMBERS).map(|i| format!("group{i}")).collect();
    let mut data = valid_user();
    data["groups"] = json!(groups);
    assert!(validate_user(&data).is_ok());

    let groups: Vec<String> = (0..=MAX_MEMBERS).map(|i| format!("group{i}")).collect();
    data["groups"] = json!(groups);
    assert_validation_error(validate_user(&data));
}

#[test]
fn group_items_are_bounded_to_35_characters() {
    let mut data = valid_user();
    data["groups"] = json!(["admins", "g".repeat(NAME_LENGTH + 1)]);

    assert_validation_error(validate_user(&data));
}

#[test]
fn duplicate_group_references_are_rejected() {
    let mut data = valid_user();
    data["groups"] = json!(["admins", "developers", "admins"]);

    let message = assert_validation_error(validate_user(&data));
    assert!(message.contains("admins"), "message was: {message}");
}

#[test]
fn group_requires_name() {
    assert!(validate_group(&json!({"name": "admins"})).is_ok());
    assert_validation_error(validate_group(&json!({})));
    assert_validation_error(validate_group(&json!({"foo": "bar"})));
}

#[test]
fn empty_identifiers_are_rejected() {
    let mut data = valid_user();
    data["userid"] = json!("");
    let message = assert_validation_error(validate_user(&data));
    assert!(message.contains("userid"), "message was: {message}");

    assert_validation_error(validate_group(&json!({"name": ""})));
}

#[test]
fn group_name_is_bounded() {
    assert_validation_error(validate_group(&json!({"name": "a".repeat(NAME_LENGTH + 1)})));
}

#[test]
fn group_members_require_userids() {
    let payload = validate_group_members(&json!({"userids": ["bc"]})).unwrap();
    assert_eq!(payload.userids, vec!["bc"]);

    assert_validation_error(validate_group_members(&json!({"foo": "bar"})));
    assert_validation_error(validate_group_members(&json!({"userids": ["bc", "bc"]})));
}

#[test]
fn identifier_bound_is_inclusive() {
    assert!(validate_identifier(&"a".repeat(NAME_LENGTH)).is_ok());

    let err = validate_identifier(&"a".repeat(NAME_LENGTH + 2)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidIdentifier { max: NAME_LENGTH, .. }
    ));
}
