use async_trait::async_trait;

use crate::models::user::UserRole;

/// Repository trait for the users holding one role, ordered by username.
#[async_trait]
pub trait FindByRole<T>: Send + Sync {
    async fn find_by_role(&self, role: UserRole) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
