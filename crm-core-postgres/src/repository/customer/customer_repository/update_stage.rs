use async_trait::async_trait;
use crm_core_db::models::customer::StageUpdate;
use crm_core_db::repository::update_stage::UpdateStage;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

#[async_trait]
impl UpdateStage for CustomerRepositoryImpl {
    /// Writes the status code and any supplied stage amounts; absent amounts keep the
    /// stored values. The row stays locked until the session ends, which serializes
    /// ledger appends for the same customer.
    async fn update_stage(
        &self,
        id: i64,
        update: &StageUpdate,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let result = sqlx::query(
            r#"
            UPDATE customer SET
                status = $2,
                quoted_amount = COALESCE($3, quoted_amount),
                quoted_on = COALESCE($4, quoted_on),
                contract_amount = COALESCE($5, contract_amount)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.status.code())
        .bind(update.quoted_amount)
        .bind(update.quoted_on)
        .bind(update.contract_amount)
        .execute(&mut **transaction)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
