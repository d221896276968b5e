use async_trait::async_trait;
use crm_core_db::models::customer::CustomerModel;
use crm_core_db::repository::find_all::FindAll;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::CustomerRepositoryImpl;

#[async_trait]
impl FindAll<CustomerModel> for CustomerRepositoryImpl {
    /// Every customer in insertion order
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM customer ORDER BY id")
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut customers = Vec::with_capacity(rows.len());
        for row in rows {
            customers.push(CustomerModel::try_from_row(&row)?);
        }
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crm_core_db::models::customer::CustomerModel;
    use crm_core_db::repository::create_batch::CreateBatch;
    use crm_core_db::repository::find_all::FindAll;
    use crm_core_db::repository::unit_of_work::UnitOfWorkSession;
    use super::super::test_utils::test_utils::{create_test_customer, random_owner};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_all_in_insertion_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.session().customer_repository();
        let owner = random_owner();

        let saved = customer_repo
            .create_batch(vec![
                create_test_customer("Order One", &owner),
                create_test_customer("Order Two", &owner),
            ])
            .await?;

        let all: Vec<CustomerModel> = customer_repo.find_all().await?;
        let ids: Vec<i64> = all.iter().filter(|c| c.owner == saved[0].owner).map(|c| c.id).collect();
        assert_eq!(ids, vec![saved[0].id, saved[1].id]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        Ok(())
    }
}
