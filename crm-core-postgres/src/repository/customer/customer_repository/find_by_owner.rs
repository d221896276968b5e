use async_trait::async_trait;
use crm_core_db::models::customer::CustomerModel;
use crm_core_db::repository::find_by_owner::FindByOwner;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::CustomerRepositoryImpl;

#[async_trait]
impl FindByOwner<CustomerModel> for CustomerRepositoryImpl {
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("SELECT * FROM customer WHERE owner = $1 ORDER BY id")
                .bind(owner)
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
    use crm_core_db::repository::create_batch::CreateBatch;
    use crm_core_db::repository::find_by_owner::FindByOwner;
    use crm_core_db::repository::unit_of_work::UnitOfWorkSession;
    use super::super::test_utils::test_utils::{create_test_customer, random_owner};

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_by_owner() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.session().customer_repository();
        let huda = random_owner();
        let sara = random_owner();

        customer_repo
            .create_batch(vec![
                create_test_customer("Owner One", &huda),
                create_test_customer("Owner Two", &sara),
                create_test_customer("Owner Three", &huda),
            ])
            .await?;

        let found = customer_repo.find_by_owner(&huda).await?;
        let names: Vec<&str> = found.iter().map(|c| c.company_name.as_str()).collect();
        assert_eq!(names, vec!["Owner One", "Owner Three"]);

        Ok(())
    }
}
