use async_trait::async_trait;
use crm_core_db::models::history::StageHistoryModel;
use crm_core_db::repository::find_by_customer_id::FindByCustomerId;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::{StageHistoryRepositoryImpl, NEWEST_FIRST};

#[async_trait]
impl FindByCustomerId<StageHistoryModel> for StageHistoryRepositoryImpl {
    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<StageHistoryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT * FROM customer_stage_history WHERE customer_id = $1 {NEWEST_FIRST}");
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(customer_id)
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(StageHistoryModel::try_from_row(&row)?);
        }
        Ok(entries)
    }
}
