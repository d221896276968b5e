use async_trait::async_trait;
use crm_core_db::models::history::StageHistoryModel;
use crm_core_db::repository::find_all::FindAll;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::{StageHistoryRepositoryImpl, NEWEST_FIRST};

#[async_trait]
impl FindAll<StageHistoryModel> for StageHistoryRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<StageHistoryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT * FROM customer_stage_history {NEWEST_FIRST}");
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).fetch_all(&mut **transaction).await?
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(StageHistoryModel::try_from_row(&row)?);
        }
        Ok(entries)
    }
}
