//! User management handlers.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::error::{ApiResult, ErrorResponse, error_response, parse_body};
use super::extractors::Identifier;
use crate::api::AppState;
use crate::db::{Database, User};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// User response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User identifier (at most 35 characters)
    #[schema(example = "bc")]
    pub userid: String,
    #[schema(example = "Bumbleywump")]
    pub first_name: String,
    #[schema(example = "Cucumberpatch")]
    pub last_name: String,
    /// Groups the user belongs to, in the order they were assigned
    #[schema(example = json!(["admins", "developers"]))]
    pub groups: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            userid: u.user_id,
            first_name: u.first_name,
            last_name: u.last_name,
            groups: u.groups,
        }
    }
}

/// Create or replace user request DTO
///
/// Documents the accepted shape; the body itself is validated by the
/// service so that malformed JSON and wrong shapes map to distinct statuses.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "bc", max_length = 35)]
    pub userid: String,
    #[schema(example = "Bumbleywump", max_length = 35)]
    pub first_name: String,
    #[schema(example = "Cucumberpatch", max_length = 35)]
    pub last_name: String,
    /// Existing groups to join (at most 50)
    #[schema(example = json!(["admins", "developers"]))]
    pub groups: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a user
///
/// Every listed group must already exist.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse),
        (status = 422, description = "Invalid user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_user<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> ApiResult<Json<UserResponse>> {
    let data = parse_body(&body)?;

    let user = state
        .service()
        .create_user(&data)
        .await
        .map_err(error_response)?;

    Ok(Json(UserResponse::from(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{userid}",
    tag = "users",
    params(
        ("userid" = String, Path, description = "User identifier (at most 35 characters)")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Identifier too long", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user<D: Database>(
    State(state): State<AppState<D>>,
    Identifier(userid): Identifier,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .service()
        .get_user(&userid)
        .await
        .map_err(error_response)?;

    Ok(Json(UserResponse::from(user)))
}

/// Replace a user
///
/// The record is replaced wholesale, including its group list.
#[utoipa::path(
    put,
    path = "/users/{userid}",
    tag = "users",
    params(
        ("userid" = String, Path, description = "User identifier (at most 35 characters)")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Identifier too long or malformed JSON", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Invalid user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_user<D: Database>(
    State(state): State<AppState<D>>,
    Identifier(userid): Identifier,
    body: Bytes,
) -> ApiResult<Json<UserResponse>> {
    let data = parse_body(&body)?;

    let user = state
        .service()
        .update_user(&userid, &data)
        .await
        .map_err(error_response)?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
///
/// Removes the user's group memberships too.
#[utoipa::path(
    delete,
    path = "/users/{userid}",
    tag = "users",
    params(
        ("userid" = String, Path, description = "User identifier (at most 35 characters)")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Identifier too long", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user<D: Database>(
    State(state): State<AppState<D>>,
    Identifier(userid): Identifier,
) -> ApiResult<StatusCode> {
    state
        .service()
        .delete_user(&userid)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
