//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic; backends classify their
//! native failures into these variants and assign no domain meaning beyond it.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(roster::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Entity already exists: {message}")]
    #[diagnostic(code(roster::db::already_exists))]
    AlreadyExists { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(roster::db::constraint))]
    Constraint { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(roster::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(roster::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(roster::db::connection_error))]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
