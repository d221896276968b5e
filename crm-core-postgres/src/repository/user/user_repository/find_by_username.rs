use async_trait::async_trait;
use crm_core_db::models::user::UserModel;
use crm_core_db::repository::find_by_username::FindByUsername;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl FindByUsername<UserModel> for UserRepositoryImpl {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM app_user WHERE username = $1")
                .bind(username)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}
