//! SQLite UserRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::classify_sqlx_error;
use super::transaction::run_in_transaction;
use crate::db::{DbError, DbResult, User, UserRepository, WriteOp};

/// SQLx-backed user repository.
pub struct SqliteUserRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl SqliteUserRepository<'_> {
    /// Read-after-write: the persisted user must be there.
    async fn reload(&self, id: &str) -> DbResult<User> {
        self.get(id).await?.ok_or_else(|| DbError::NotFound {
            entity_type: "User".to_string(),
            id: id.to_string(),
        })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    async fn get(&self, id: &str) -> DbResult<Option<User>> {
        let row = sqlx::query("SELECT id, first_name, last_name FROM user_account WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let groups: Vec<String> =
            sqlx::query_scalar("SELECT group_id FROM membership WHERE user_id = ? ORDER BY rowid")
                .bind(id)
                .fetch_all(self.pool)
                .await
                .map_err(classify_sqlx_error)?;

        Ok(Some(User {
            user_id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            groups,
        }))
    }

    async fn create(&self, user: &User) -> DbResult<User> {
        run_in_transaction(self.pool, &WriteOp::insert_user(user)).await?;
        self.reload(&user.user_id).await
    }

    async fn update(&self, id: &str, user: &User) -> DbResult<User> {
        run_in_transaction(self.pool, &WriteOp::replace_user(id, user)).await?;
        self.reload(&user.user_id).await
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM user_account WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        Ok(())
    }
}
