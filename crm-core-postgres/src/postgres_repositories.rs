use async_trait::async_trait;
use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

use crm_core_db::repository::unit_of_work::UnitOfWork;

use crate::config::CrmSettings;
use crate::unit_of_work::{Executor, PostgresSession};

/// Entry point of the PostgreSQL store, opened once at process start.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(settings: &CrmSettings) -> Result<Self, sqlx::Error> {
        let pool = settings.database.connect().await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Start a transaction and build all repositories on it
    pub async fn create_session(&self) -> Result<PostgresSession, sqlx::Error> {
        let tx = self.pool.begin().await?;
        debug!("session started");
        Ok(PostgresSession::new(Executor::new(tx)))
    }
}

#[async_trait]
impl UnitOfWork for PostgresRepositories {
    type Session = PostgresSession;

    async fn begin(&self) -> Result<PostgresSession, Box<dyn Error + Send + Sync>> {
        Ok(self.create_session().await?)
    }
}

#[cfg(test)]
mod tests {
    use crm_core_api::{CrmError, NewCustomer, StageChange};
    use crm_core_db::models::customer::PipelineStage;
    use crm_core_db::CustomerService;
    use rand::Rng;
    use std::sync::Arc;

    use crate::test_helper::setup_shared_repos;

    fn new_customer(company_name: &str, phone: &str, owner: &str) -> NewCustomer {
        NewCustomer {
            company_name: company_name.to_string(),
            country_code: "966".to_string(),
            phone: phone.to_string(),
            owner: owner.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_service_over_postgres() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let service = CustomerService::new(Arc::new(setup_shared_repos(5).await?));
        let suffix: u32 = rand::thread_rng().gen();
        let phone = format!("5{:08}", suffix % 100_000_000);
        let company = format!("Noor{suffix} Trading Co.");

        let id = service
            .create_customer(new_customer(&company, &phone, "Khalid"))
            .await?;
        let customer = service.load_customer(id).await?;
        assert_eq!(customer.phone.as_str(), format!("+966{phone}"));
        assert_eq!(customer.status, PipelineStage::New);

        let duplicate = service
            .create_customer(new_customer(&format!("Noor{suffix}"), &phone, "Sara"))
            .await;
        assert!(matches!(
            duplicate,
            Err(CrmError::Duplicate { existing_customer_id, .. }) if existing_customer_id == id
        ));

        let entry = service
            .advance_stage(StageChange {
                customer_id: id,
                new_stage: "contacted".to_string(),
                actor: "Sara".to_string(),
                notes: Some("left voicemail".to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(service.load_customer(id).await?.status, PipelineStage::Contacted);

        let timeline = service.customer_timeline(id).await?;
        assert_eq!(timeline, vec![entry]);
        service.verify_timeline(id).await?;

        Ok(())
    }
}
