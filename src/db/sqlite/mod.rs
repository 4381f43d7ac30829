//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod group;
mod helpers;
mod transaction;
mod user;

#[cfg(test)]
mod user_test;

pub use connection::SqliteDatabase;
pub use group::SqliteGroupRepository;
pub use user::SqliteUserRepository;
