use async_trait::async_trait;
use crm_core_db::models::history::StageHistoryModel;
use crm_core_db::repository::append::Append;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::StageHistoryRepositoryImpl;

#[async_trait]
impl Append<StageHistoryModel> for StageHistoryRepositoryImpl {
    /// Links the entry to the latest entry of the same customer, seals it and inserts it.
    async fn append(
        &self,
        mut entry: StageHistoryModel,
    ) -> Result<StageHistoryModel, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        let antecedent_hash: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT hash FROM customer_stage_history
            WHERE customer_id = $1
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(entry.customer_id)
        .fetch_optional(&mut **transaction)
        .await?;
        entry.seal(antecedent_hash.unwrap_or(0))?;

        let row = sqlx::query(
            r#"
            INSERT INTO customer_stage_history (
                customer_id, company_name, updated_stage, changed_by, notes, created_at,
                antecedent_hash, hash
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(entry.customer_id)
        .bind(entry.company_name.as_str())
        .bind(entry.updated_stage.code())
        .bind(entry.changed_by.as_str())
        .bind(entry.notes.as_deref())
        .bind(entry.created_at)
        .bind(entry.antecedent_hash)
        .bind(entry.hash)
        .fetch_one(&mut **transaction)
        .await?;

        entry.id = row.try_get("id")?;
        Ok(entry)
    }
}
