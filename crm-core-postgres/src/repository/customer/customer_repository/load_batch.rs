use async_trait::async_trait;
use crm_core_db::models::customer::CustomerModel;
use crm_core_db::repository::load_batch::LoadBatch;
use std::collections::HashMap;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &CustomerRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<CustomerModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM customer WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = CustomerModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.get(id).cloned()).collect())
    }
}

#[async_trait]
impl LoadBatch<CustomerModel> for CustomerRepositoryImpl {
    async fn load_batch(&self, ids: &[i64]) -> Result<Vec<Option<CustomerModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crm_core_db::models::customer::PipelineStage;
    use crm_core_db::repository::create_batch::CreateBatch;
    use crm_core_db::repository::load_batch::LoadBatch;
    use crm_core_db::repository::unit_of_work::UnitOfWorkSession;
    use super::super::test_utils::test_utils::{create_test_customer, random_owner};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_load_batch_with_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.session().customer_repository();

        let saved = customer_repo
            .create_batch(vec![create_test_customer("Golden Palm", &random_owner())])
            .await?;

        let loaded = customer_repo.load_batch(&[saved[0].id, -1]).await?;
        assert_eq!(loaded.len(), 2);
        let customer = loaded[0].as_ref().unwrap();
        assert_eq!(customer.phone, saved[0].phone);
        assert_eq!(customer.status, PipelineStage::New);
        assert!(loaded[1].is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_load_batch_repeated_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.session().customer_repository();

        let saved = customer_repo
            .create_batch(vec![create_test_customer("Palm Court", &random_owner())])
            .await?;

        let loaded = customer_repo.load_batch(&[saved[0].id, saved[0].id]).await?;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], loaded[1]);
        assert!(loaded[1].is_some());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_legacy_status_read_as_initial_stage() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.session().customer_repository();

        let saved = customer_repo
            .create_batch(vec![create_test_customer("Legacy Import", &random_owner())])
            .await?;
        {
            let mut tx = customer_repo.executor.tx.lock().await;
            let transaction = tx.as_mut().unwrap();
            sqlx::query("UPDATE customer SET status = 'تحت المتابعة' WHERE id = $1")
                .bind(saved[0].id)
                .execute(&mut **transaction)
                .await?;
        }

        let loaded = customer_repo.load_batch(&[saved[0].id]).await?;
        let customer = loaded[0].as_ref().unwrap();
        assert_eq!(customer.status, PipelineStage::New);
        assert_eq!(customer.non_standard_status.as_deref(), Some("تحت المتابعة"));

        Ok(())
    }
}
