use async_trait::async_trait;
use crm_core_db::models::customer::CustomerModel;
use crm_core_db::repository::create_batch::CreateBatch;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &CustomerRepositoryImpl,
        items: Vec<CustomerModel>,
    ) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for mut item in items {
            let row = sqlx::query(
                r#"
                INSERT INTO customer (
                    company_name, sector, contact_name, job_title, phone, email,
                    event_name, owner, status, quoted_amount, quoted_on, contract_amount,
                    created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING id
                "#,
            )
            .bind(item.company_name.as_str())
            .bind(item.sector.as_ref().map(|s| s.as_str()))
            .bind(item.contact_name.as_ref().map(|s| s.as_str()))
            .bind(item.job_title.as_ref().map(|s| s.as_str()))
            .bind(item.phone.as_str())
            .bind(item.email.as_ref().map(|s| s.as_str()))
            .bind(item.event_name.as_ref().map(|s| s.as_str()))
            .bind(item.owner.as_str())
            .bind(item.status.code())
            .bind(item.quoted_amount)
            .bind(item.quoted_on)
            .bind(item.contract_amount)
            .bind(item.created_at)
            .fetch_one(&mut **transaction)
            .await?;

            item.id = row.try_get("id")?;
            saved_items.push(item);
        }

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<CustomerModel> for CustomerRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CustomerModel>,
    ) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crm_core_db::repository::create_batch::CreateBatch;
    use crm_core_db::repository::unit_of_work::UnitOfWorkSession;
    use super::super::test_utils::test_utils::{create_test_customer, random_owner};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.session().customer_repository();
        let owner = random_owner();

        let customers: Vec<_> = (0..3)
            .map(|i| create_test_customer(&format!("Test Company {i}"), &owner))
            .collect();
        let saved = customer_repo.create_batch(customers).await?;

        assert_eq!(saved.len(), 3);
        assert!(saved.iter().all(|c| c.id > 0));
        assert!(saved[0].id < saved[1].id && saved[1].id < saved[2].id);
        assert_eq!(saved[0].company_name.as_str(), "Test Company 0");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let saved = ctx.session().customer_repository().create_batch(Vec::new()).await?;
        assert!(saved.is_empty());
        Ok(())
    }
}
