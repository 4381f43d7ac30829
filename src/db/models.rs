//! Domain models for the roster database.
//!
//! These models are storage-agnostic values. The repository owns every
//! persisted row; callers receive fresh copies and discard them.

use serde::{Deserialize, Serialize};

/// A user and the groups it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Group identifiers in membership insertion order.
    pub groups: Vec<String>,
}

/// A group and the users that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: String,
    /// User identifiers in membership insertion order.
    pub users: Vec<String>,
}

impl Group {
    /// A group with no members.
    pub fn empty(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            users: vec![],
        }
    }
}

/// A single write statement executed inside a transaction.
///
/// Repositories express every multi-row mutation as an ordered plan of
/// these, which `Database::run_transaction` applies all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    InsertUser {
        id: String,
        first_name: String,
        last_name: String,
    },
    InsertGroup {
        id: String,
    },
    InsertMembership {
        user_id: String,
        group_id: String,
    },
    /// Cascades to the user's membership rows.
    DeleteUser {
        id: String,
    },
    /// Cascades to the group's membership rows.
    DeleteGroup {
        id: String,
    },
}

impl WriteOp {
    /// Entity row followed by one membership row per group.
    pub fn insert_user(user: &User) -> Vec<WriteOp> {
        let mut ops = Vec::with_capacity(user.groups.len() + 1);
        ops.push(WriteOp::InsertUser {
            id: user.user_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        });
        ops.extend(user.groups.iter().map(|group_id| WriteOp::InsertMembership {
            user_id: user.user_id.clone(),
            group_id: group_id.clone(),
        }));
        ops
    }

    /// Entity row followed by one membership row per user.
    pub fn insert_group(group: &Group) -> Vec<WriteOp> {
        let mut ops = Vec::with_capacity(group.users.len() + 1);
        ops.push(WriteOp::InsertGroup {
            id: group.group_id.clone(),
        });
        ops.extend(group.users.iter().map(|user_id| WriteOp::InsertMembership {
            user_id: user_id.clone(),
            group_id: group.group_id.clone(),
        }));
        ops
    }

    /// Delete `id` and re-insert `user` wholesale.
    pub fn replace_user(id: &str, user: &User) -> Vec<WriteOp> {
        let mut ops = vec![WriteOp::DeleteUser { id: id.to_string() }];
        ops.extend(Self::insert_user(user));
        ops
    }

    /// Delete `id` and re-insert `group` wholesale.
    pub fn replace_group(id: &str, group: &Group) -> Vec<WriteOp> {
        let mut ops = vec![WriteOp::DeleteGroup { id: id.to_string() }];
        ops.extend(Self::insert_group(group));
        ops
    }
}
