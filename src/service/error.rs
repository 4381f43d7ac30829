//! Resource service outcomes.
//!
//! Every caller input problem and existence precondition is an explicit
//! variant; the HTTP boundary maps variants to status codes.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

/// Resource service errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    /// Malformed, missing or extra fields; out-of-bounds values.
    #[error("Validation error: {message}")]
    #[diagnostic(code(roster::service::validation))]
    Validation { message: String },

    /// Path identifier longer than the identifier bound.
    #[error("Invalid identifier: must be at most {max} characters")]
    #[diagnostic(code(roster::service::invalid_identifier))]
    InvalidIdentifier { id: String, max: usize },

    #[error("{entity_type} '{id}' not found")]
    #[diagnostic(code(roster::service::not_found))]
    NotFound { entity_type: &'static str, id: String },

    #[error("{entity_type} '{id}' already exists")]
    #[diagnostic(code(roster::service::already_exists))]
    AlreadyExists { entity_type: &'static str, id: String },

    /// Unclassified storage failure.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Storage(#[from] DbError),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: errors.to_string(),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

/// Result type for resource service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
