//! SQLite GroupRepository implementation.

use sqlx::SqlitePool;

use super::helpers::classify_sqlx_error;
use super::transaction::run_in_transaction;
use crate::db::{DbError, DbResult, Group, GroupRepository, WriteOp};

/// SQLx-backed group repository.
pub struct SqliteGroupRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl SqliteGroupRepository<'_> {
    async fn reload(&self, id: &str) -> DbResult<Group> {
        self.get(id).await?.ok_or_else(|| DbError::NotFound {
            entity_type: "Group".to_string(),
            id: id.to_string(),
        })
    }
}

impl GroupRepository for SqliteGroupRepository<'_> {
    async fn get(&self, id: &str) -> DbResult<Option<Group>> {
        let group_id: Option<String> = sqlx::query_scalar("SELECT id FROM user_group WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        let Some(group_id) = group_id else {
            return Ok(None);
        };

        let users: Vec<String> =
            sqlx::query_scalar("SELECT user_id FROM membership WHERE group_id = ? ORDER BY rowid")
                .bind(id)
                .fetch_all(self.pool)
                .await
                .map_err(classify_sqlx_error)?;

        Ok(Some(Group { group_id, users }))
    }

    async fn create(&self, group: &Group) -> DbResult<Group> {
        run_in_transaction(self.pool, &WriteOp::insert_group(group)).await?;
        self.reload(&group.group_id).await
    }

    async fn update(&self, id: &str, group: &Group) -> DbResult<Group> {
        run_in_transaction(self.pool, &WriteOp::replace_group(id, group)).await?;
        self.reload(&group.group_id).await
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM user_group WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        Ok(())
    }
}
