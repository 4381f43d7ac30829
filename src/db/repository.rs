//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Methods return `Send` futures so handlers stay generic over `Database`.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Group, User, WriteOp},
};

/// Repository for User operations.
pub trait UserRepository {
    /// Get a user with its group memberships. `Ok(None)` when absent.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Option<User>>> + Send;

    /// Insert the user and its memberships atomically, then reload it.
    fn create(&self, user: &User) -> impl Future<Output = DbResult<User>> + Send;

    /// Replace user `id` wholesale (delete then re-insert in one transaction).
    fn update(&self, id: &str, user: &User) -> impl Future<Output = DbResult<User>> + Send;

    /// Delete a user; memberships cascade. Deleting an absent id is a no-op.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Group operations.
pub trait GroupRepository {
    /// Get a group with its members. `Ok(None)` when absent.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Option<Group>>> + Send;

    /// Insert the group and its memberships atomically, then reload it.
    fn create(&self, group: &Group) -> impl Future<Output = DbResult<Group>> + Send;

    /// Replace group `id` wholesale (delete then re-insert in one transaction).
    fn update(&self, id: &str, group: &Group) -> impl Future<Output = DbResult<Group>> + Send;

    /// Delete a group; memberships cascade. Deleting an absent id is a no-op.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Users<'a>: UserRepository + Send
    where
        Self: 'a;
    type Groups<'a>: GroupRepository + Send
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the user repository.
    fn users(&self) -> Self::Users<'_>;

    /// Get the group repository.
    fn groups(&self) -> Self::Groups<'_>;

    /// Execute `ops` in order as one atomic unit.
    ///
    /// Any failing statement rolls back every statement before it and the
    /// failure is returned to the caller.
    fn run_transaction(&self, ops: &[WriteOp]) -> impl Future<Output = DbResult<()>> + Send;
}
