use async_trait::async_trait;
use crm_core_db::models::user::UserModel;
use crm_core_db::repository::create_batch::CreateBatch;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl CreateBatch<UserModel> for UserRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for mut item in items {
            let row = sqlx::query(
                r#"
                INSERT INTO app_user (username, display_name, role)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(item.username.as_str())
            .bind(item.display_name.as_str())
            .bind(item.role)
            .fetch_one(&mut **transaction)
            .await?;

            item.id = row.try_get("id")?;
            saved_items.push(item);
        }

        Ok(saved_items)
    }
}
