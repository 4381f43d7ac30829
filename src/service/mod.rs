//! Resource service.
//!
//! Sequences validation and existence checks around repository calls so the
//! boundary layer can report not-found, conflict and validation outcomes
//! precisely. Each operation issues at most one mutating repository call,
//! which runs as a single transaction.

mod error;
mod groups;
mod users;
pub mod validation;

#[cfg(test)]
mod validation_test;

use std::sync::Arc;

pub use error::{ServiceError, ServiceResult};

use crate::db::{Database, DbError};

/// User and group operations over a `Database`.
pub struct ResourceService<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc needs cloning, not D
impl<D: Database> Clone for ResourceService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> ResourceService<D> {
    /// Create a service over an already migrated database.
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }
}

/// Classify a failed mutation.
///
/// `reference` names what the entity's membership list points at, so a
/// foreign-key failure can be reported as a caller error.
fn classify_write_failure(
    err: DbError,
    entity_type: &'static str,
    id: &str,
    reference: &'static str,
) -> ServiceError {
    match err {
        DbError::AlreadyExists { .. } => ServiceError::AlreadyExists {
            entity_type,
            id: id.to_string(),
        },
        DbError::NotFound { .. } => ServiceError::NotFound {
            entity_type,
            id: id.to_string(),
        },
        DbError::Constraint { .. } => ServiceError::Validation {
            message: format!("every referenced {reference} must already exist"),
        },
        other => ServiceError::Storage(other),
    }
}
