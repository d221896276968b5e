use tracing::info;
use validator::Validate;

use crm_core_api::{CrmError, CrmResult, NewUser};

use crate::models::user::{UserModel, UserRole};
use crate::repository::*;
use crate::service::{bounded, CustomerService};

impl<U: UnitOfWork> CustomerService<U> {
    /// Adds a sales team account. Usernames are unique.
    pub async fn register_user(&self, request: NewUser) -> CrmResult<UserModel> {
        request.validate()?;
        let role: UserRole = request
            .role
            .parse()
            .map_err(|_| CrmError::ValidationError(format!("Unknown role: {}", request.role)))?;
        let user = UserModel {
            id: 0,
            username: bounded("username", &request.username)?,
            display_name: bounded("display_name", &request.display_name)?,
            role,
        };

        let session = self.store.begin().await?;
        if session
            .user_repository()
            .find_by_username(&user.username)
            .await?
            .is_some()
        {
            return Err(CrmError::ValidationError(format!(
                "Username '{}' is already registered",
                user.username
            )));
        }
        let saved = session.user_repository().create_batch(vec![user]).await?;
        let created = saved
            .into_iter()
            .next()
            .ok_or_else(|| CrmError::InternalError("Insert returned no user".to_string()))?;
        session.commit().await?;

        info!(user_id = created.id, username = %created.username, role = %created.role, "user registered");
        Ok(created)
    }

    /// Display names of every representative, ordered by username
    pub async fn list_representatives(&self) -> CrmResult<Vec<String>> {
        let session = self.store.begin().await?;
        let reps = session.user_repository().find_by_role(UserRole::Rep).await?;
        Ok(reps.into_iter().map(|u| u.display_name.to_string()).collect())
    }
}
