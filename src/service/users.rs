//! User operations.

use serde_json::Value;
use tracing::{debug, instrument};

use super::validation::{UserPayload, validate_identifier, validate_user};
use super::{ResourceService, ServiceError, ServiceResult, classify_write_failure};
use crate::db::{Database, User, UserRepository};

const ENTITY: &str = "User";
const REFERENCE: &str = "group";

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            user_id: payload.userid,
            first_name: payload.first_name,
            last_name: payload.last_name,
            groups: payload.groups,
        }
    }
}

impl<D: Database> ResourceService<D> {
    /// Create a user. The id must not be taken.
    #[instrument(skip(self, data))]
    pub async fn create_user(&self, data: &Value) -> ServiceResult<User> {
        let user = User::from(validate_user(data)?);

        if self.db().users().get(&user.user_id).await?.is_some() {
            return Err(ServiceError::AlreadyExists {
                entity_type: ENTITY,
                id: user.user_id,
            });
        }

        let created = self
            .db()
            .users()
            .create(&user)
            .await
            .map_err(|e| classify_write_failure(e, ENTITY, &user.user_id, REFERENCE))?;

        debug!(user_id = %created.user_id, groups = created.groups.len(), "Created user");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> ServiceResult<User> {
        validate_identifier(user_id)?;
        self.existing_user(user_id).await
    }

    /// Replace a user wholesale. The user must exist and the body's
    /// `userid` must match the path.
    #[instrument(skip(self, data))]
    pub async fn update_user(&self, user_id: &str, data: &Value) -> ServiceResult<User> {
        validate_identifier(user_id)?;
        let user = User::from(validate_user(data)?);

        if user.user_id != user_id {
            return Err(ServiceError::Validation {
                message: format!(
                    "userid '{}' does not match the user being updated",
                    user.user_id
                ),
            });
        }

        self.existing_user(user_id).await?;

        let updated = self
            .db()
            .users()
            .update(user_id, &user)
            .await
            .map_err(|e| classify_write_failure(e, ENTITY, user_id, REFERENCE))?;

        debug!(user_id, groups = updated.groups.len(), "Updated user");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> ServiceResult<()> {
        validate_identifier(user_id)?;
        self.existing_user(user_id).await?;

        self.db().users().delete(user_id).await?;

        debug!(user_id, "Deleted user");
        Ok(())
    }

    /// Fetch or signal not found.
    async fn existing_user(&self, user_id: &str) -> ServiceResult<User> {
        self.db()
            .users()
            .get(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity_type: ENTITY,
                id: user_id.to_string(),
            })
    }
}
