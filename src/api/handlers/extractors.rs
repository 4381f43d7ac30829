//! Custom Axum extractors

use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};

use super::error::{ErrorResponse, reply};

/// A single path segment decoded as UTF-8.
///
/// Rejections are answered with a JSON error body; the length bound is
/// checked by the service.
#[derive(Debug)]
pub struct Identifier(pub String);

impl<S> FromRequestParts<S> for Identifier
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| reply(StatusCode::BAD_REQUEST, rejection.body_text()))?;

        Ok(Self(id))
    }
}
