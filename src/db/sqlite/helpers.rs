//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;

use crate::db::DbError;

/// Classify a sqlx failure into a storage-agnostic `DbError`.
///
/// Primary-key and unique violations become `AlreadyExists`, foreign-key
/// violations become `Constraint`; everything else is a plain `Database` error.
pub fn classify_sqlx_error(err: sqlx::Error) -> DbError {
    if let Some(db_err) = err.as_database_error() {
        let message = db_err.message().to_string();
        return match db_err.kind() {
            ErrorKind::UniqueViolation => DbError::AlreadyExists { message },
            ErrorKind::ForeignKeyViolation => DbError::Constraint { message },
            _ => DbError::Database { message },
        };
    }

    DbError::Database {
        message: err.to_string(),
    }
}
