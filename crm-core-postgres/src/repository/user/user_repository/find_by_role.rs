use async_trait::async_trait;
use crm_core_db::models::user::{UserModel, UserRole};
use crm_core_db::repository::find_by_role::FindByRole;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl FindByRole<UserModel> for UserRepositoryImpl {
    async fn find_by_role(&self, role: UserRole) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM app_user WHERE role = $1 ORDER BY username")
                .bind(role)
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(UserModel::try_from_row(&row)?);
        }
        Ok(users)
    }
}
