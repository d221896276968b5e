use async_trait::async_trait;
use crm_core_db::models::history::StageHistoryModel;
use crm_core_db::repository::find_page::FindPage;
use crm_core_db::repository::pagination::{Page, PageRequest};
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::{StageHistoryRepositoryImpl, NEWEST_FIRST};

#[async_trait]
impl FindPage<StageHistoryModel> for StageHistoryRepositoryImpl {
    async fn find_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<StageHistoryModel>, Box<dyn Error + Send + Sync>> {
        let limit = i64::try_from(page.limit).map_err(|_| format!("Page limit {} out of range", page.limit))?;
        let offset = i64::try_from(page.offset).map_err(|_| format!("Page offset {} out of range", page.offset))?;
        let query = format!("SELECT * FROM customer_stage_history {NEWEST_FIRST} LIMIT $1 OFFSET $2");
        let (total, rows) = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer_stage_history")
                .fetch_one(&mut **transaction)
                .await?;
            let rows = sqlx::query(&query)
                .bind(limit)
                .bind(offset)
                .fetch_all(&mut **transaction)
                .await?;
            (total, rows)
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(StageHistoryModel::try_from_row(&row)?);
        }
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
