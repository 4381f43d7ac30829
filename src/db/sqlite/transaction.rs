//! Atomic execution of `WriteOp` plans.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, warn};

use super::helpers::classify_sqlx_error;
use crate::db::{DbResult, WriteOp};

/// Run `ops` in order inside one transaction.
///
/// The first failing statement rolls the whole transaction back and its
/// classified error is returned.
pub(crate) async fn run_in_transaction(pool: &SqlitePool, ops: &[WriteOp]) -> DbResult<()> {
    let mut tx = pool.begin().await.map_err(classify_sqlx_error)?;

    for (index, op) in ops.iter().enumerate() {
        if let Err(err) = apply(&mut *tx, op).await {
            warn!(statement = index, ?op, error = %err, "Rolling back transaction");
            tx.rollback().await.map_err(classify_sqlx_error)?;
            return Err(err);
        }
    }

    tx.commit().await.map_err(classify_sqlx_error)?;
    debug!(statements = ops.len(), "Committed transaction");
    Ok(())
}

/// Execute a single statement on an open connection.
async fn apply(conn: &mut SqliteConnection, op: &WriteOp) -> DbResult<()> {
    debug!(?op, "Executing statement");

    let query = match op {
        WriteOp::InsertUser {
            id,
            first_name,
            last_name,
        } => sqlx::query("INSERT INTO user_account (id, first_name, last_name) VALUES (?, ?, ?)")
            .bind(id)
            .bind(first_name)
            .bind(last_name),
        WriteOp::InsertGroup { id } => {
            sqlx::query("INSERT INTO user_group (id) VALUES (?)").bind(id)
        }
        WriteOp::InsertMembership { user_id, group_id } => {
            sqlx::query("INSERT INTO membership (user_id, group_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(group_id)
        }
        WriteOp::DeleteUser { id } => {
            sqlx::query("DELETE FROM user_account WHERE id = ?").bind(id)
        }
        WriteOp::DeleteGroup { id } => sqlx::query("DELETE FROM user_group WHERE id = ?").bind(id),
    };

    query
        .execute(&mut *conn)
        .await
        .map_err(classify_sqlx_error)?;

    Ok(())
}
