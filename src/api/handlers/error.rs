//! Mapping of service outcomes to HTTP responses.

use axum::{Json, body::Bytes, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::service::ServiceError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "User 'bc' not found")]
    pub error: String,
}

/// Handler result: a JSON body or a status with a JSON error body.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

const INTERNAL_ERROR: &str = "Internal server error";

pub(super) fn reply(
    status: StatusCode,
    error: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Map a service outcome to its status code.
///
/// Storage failures are logged and answered with a generic 500 body.
pub fn error_response(err: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ServiceError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::AlreadyExists { .. } => StatusCode::CONFLICT,
        ServiceError::Storage(source) => {
            error!(error = %source, "Unclassified storage failure");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
    };

    reply(status, err.to_string())
}

/// Parse a request body as JSON regardless of its content type.
pub fn parse_body(body: &Bytes) -> ApiResult<Value> {
    serde_json::from_slice(body)
        .map_err(|e| reply(StatusCode::BAD_REQUEST, format!("Malformed JSON body: {e}")))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    reply(StatusCode::NOT_FOUND, "Not found")
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    reply(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
