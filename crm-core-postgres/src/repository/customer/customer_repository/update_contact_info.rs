use async_trait::async_trait;
use crm_core_db::models::customer::ContactChanges;
use crm_core_db::repository::update_contact_info::UpdateContactInfo;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

#[async_trait]
impl UpdateContactInfo for CustomerRepositoryImpl {
    async fn update_contact_info(
        &self,
        id: i64,
        changes: &ContactChanges,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let result = sqlx::query(
            r#"
            UPDATE customer SET
                company_name = COALESCE($2, company_name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.company_name.as_ref().map(|s| s.as_str()))
        .bind(changes.phone.as_ref().map(|s| s.as_str()))
        .bind(changes.email.as_ref().map(|s| s.as_str()))
        .execute(&mut **transaction)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
