//! Group management handlers.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::error::{ApiResult, ErrorResponse, error_response, parse_body};
use super::extractors::Identifier;
use crate::api::AppState;
use crate::db::{Database, Group};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Group response DTO
///
/// The group's name is the path parameter and is not echoed back.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupResponse {
    /// Members of the group, in the order they were assigned
    #[schema(example = json!(["bc"]))]
    pub userids: Vec<String>,
}

impl From<Group> for GroupResponse {
    fn from(g: Group) -> Self {
        Self { userids: g.users }
    }
}

/// Create group request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    #[schema(example = "admins", max_length = 35)]
    pub name: String,
}

/// Replace group members request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGroupRequest {
    /// Existing users forming the new member list (at most 50)
    #[schema(example = json!(["bc"]))]
    pub userids: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Create an empty group
#[utoipa::path(
    post,
    path = "/groups",
    tag = "groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created", body = GroupResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 409, description = "Group already exists", body = ErrorResponse),
        (status = 422, description = "Invalid group", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_group<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> ApiResult<Json<GroupResponse>> {
    let data = parse_body(&body)?;

    let group = state
        .service()
        .create_group(&data)
        .await
        .map_err(error_response)?;

    Ok(Json(GroupResponse::from(group)))
}

/// Get a group's members
#[utoipa::path(
    get,
    path = "/groups/{name}",
    tag = "groups",
    params(
        ("name" = String, Path, description = "Group name (at most 35 characters)")
    ),
    responses(
        (status = 200, description = "Group found", body = GroupResponse),
        (status = 400, description = "Identifier too long", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_group<D: Database>(
    State(state): State<AppState<D>>,
    Identifier(name): Identifier,
) -> ApiResult<Json<GroupResponse>> {
    let group = state
        .service()
        .get_group(&name)
        .await
        .map_err(error_response)?;

    Ok(Json(GroupResponse::from(group)))
}

/// Replace a group's member list
#[utoipa::path(
    put,
    path = "/groups/{name}",
    tag = "groups",
    params(
        ("name" = String, Path, description = "Group name (at most 35 characters)")
    ),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Group updated", body = GroupResponse),
        (status = 400, description = "Identifier too long or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 422, description = "Invalid member list", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_group<D: Database>(
    State(state): State<AppState<D>>,
    Identifier(name): Identifier,
    body: Bytes,
) -> ApiResult<Json<GroupResponse>> {
    let data = parse_body(&body)?;

    let group = state
        .service()
        .update_group(&name, &data)
        .await
        .map_err(error_response)?;

    Ok(Json(GroupResponse::from(group)))
}

/// Delete a group
#[utoipa::path(
    delete,
    path = "/groups/{name}",
    tag = "groups",
    params(
        ("name" = String, Path, description = "Group name (at most 35 characters)")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 400, description = "Identifier too long", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_group<D: Database>(
    State(state): State<AppState<D>>,
    Identifier(name): Identifier,
) -> ApiResult<StatusCode> {
    state
        .service()
        .delete_group(&name)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
