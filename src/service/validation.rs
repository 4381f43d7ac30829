//! Request payload validation.
//!
//! Pure functions: a JSON value either becomes a typed payload or a
//! `ServiceError::Validation`. Unknown fields are rejected and every field
//! is mandatory.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use super::error::{ServiceError, ServiceResult};

/// Maximum length of identifiers and names, in characters.
pub const NAME_LENGTH: usize = 35;

/// Maximum number of members in a `groups`/`userids` list.
pub const MAX_MEMBERS: usize = 50;

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    #[validate(length(min = 1, max = 35, message = "userid must be 1 to 35 characters"))]
    pub userid: String,
    #[validate(length(max = 35, message = "first_name must be at most 35 characters"))]
    pub first_name: String,
    #[validate(length(max = 35, message = "last_name must be at most 35 characters"))]
    pub last_name: String,
    #[validate(
        length(max = 50, message = "groups must have at most 50 items"),
        custom(function = "member_identifiers")
    )]
    pub groups: Vec<String>,
}

/// Body of `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GroupPayload {
    #[validate(length(min = 1, max = 35, message = "name must be 1 to 35 characters"))]
    pub name: String,
}

/// Body of `PUT /groups/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GroupMembersPayload {
    #[validate(
        length(max = 50, message = "userids must have at most 50 items"),
        custom(function = "member_identifiers")
    )]
    pub userids: Vec<String>,
}

/// Each member reference is a bounded identifier, listed once.
fn member_identifiers(ids: &[String]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| id.chars().count() > NAME_LENGTH) {
        return Err(ValidationError::new("identifier_length")
            .with_message(Cow::from("each identifier must be at most 35 characters")));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(ValidationError::new("duplicate_identifier")
            .with_message(Cow::from(format!("'{duplicate}' is listed more than once"))));
    }

    Ok(())
}

/// Parse `data` into `T` and check its field constraints.
fn parse<T>(data: &Value) -> ServiceResult<T>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let payload = T::deserialize(data)?;
    payload.validate()?;
    Ok(payload)
}

pub fn validate_user(data: &Value) -> ServiceResult<UserPayload> {
    parse(data)
}

pub fn validate_group(data: &Value) -> ServiceResult<GroupPayload> {
    parse(data)
}

pub fn validate_group_members(data: &Value) -> ServiceResult<GroupMembersPayload> {
    parse(data)
}

/// Path identifiers (user ids and group names) share one bound.
pub fn validate_identifier(id: &str) -> ServiceResult<()> {
    if id.chars().count() > NAME_LENGTH {
        return Err(ServiceError::InvalidIdentifier {
            id: id.to_string(),
            max: NAME_LENGTH,
        });
    }
    Ok(())
}
