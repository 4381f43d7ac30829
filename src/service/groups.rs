//! Group operations.
//!
//! Creation takes `{name}`; update takes `{userids}` because a group's
//! mutable surface is its membership list, not its identity.

use serde_json::Value;
use tracing::{debug, instrument};

use super::validation::{validate_group, validate_group_members, validate_identifier};
use super::{ResourceService, ServiceError, ServiceResult, classify_write_failure};
use crate::db::{Database, Group, GroupRepository};

const ENTITY: &str = "Group";
const REFERENCE: &str = "user";

impl<D: Database> ResourceService<D> {
    /// Create an empty group. The name must not be taken.
    #[instrument(skip(self, data))]
    pub async fn create_group(&self, data: &Value) -> ServiceResult<Group> {
        let group = Group::empty(validate_group(data)?.name);

        if self.db().groups().get(&group.group_id).await?.is_some() {
            return Err(ServiceError::AlreadyExists {
                entity_type: ENTITY,
                id: group.group_id,
            });
        }

        let created = self
            .db()
            .groups()
            .create(&group)
            .await
            .map_err(|e| classify_write_failure(e, ENTITY, &group.group_id, REFERENCE))?;

        debug!(group_id = %created.group_id, "Created group");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_group(&self, group_name: &str) -> ServiceResult<Group> {
        validate_identifier(group_name)?;
        self.existing_group(group_name).await
    }

    /// Replace a group's member list wholesale. The group must exist.
    #[instrument(skip(self, data))]
    pub async fn update_group(&self, group_name: &str, data: &Value) -> ServiceResult<Group> {
        validate_identifier(group_name)?;
        let members = validate_group_members(data)?;

        self.existing_group(group_name).await?;

        let group = Group {
            group_id: group_name.to_string(),
            users: members.userids,
        };
        let updated = self
            .db()
            .groups()
            .update(group_name, &group)
            .await
            .map_err(|e| classify_write_failure(e, ENTITY, group_name, REFERENCE))?;

        debug!(group_id = group_name, users = updated.users.len(), "Updated group");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_group(&self, group_name: &str) -> ServiceResult<()> {
        validate_identifier(group_name)?;
        self.existing_group(group_name).await?;

        self.db().groups().delete(group_name).await?;

        debug!(group_id = group_name, "Deleted group");
        Ok(())
    }

    /// Fetch or signal not found.
    async fn existing_group(&self, group_name: &str) -> ServiceResult<Group> {
        self.db()
            .groups()
            .get(group_name)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity_type: ENTITY,
                id: group_name.to_string(),
            })
    }
}
