use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crm_core_db::repository::unit_of_work::UnitOfWorkSession;

use crate::repository::customer::CustomerRepositoryImpl;
use crate::repository::history::StageHistoryRepositoryImpl;
use crate::repository::user::UserRepositoryImpl;

/// Handle on the transaction of one session, cloned into every repository of it.
///
/// The transaction is taken out on commit or rollback; statements issued afterwards fail
/// with "Transaction has been consumed".
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    async fn take(&self) -> Result<Transaction<'static, Postgres>, Box<dyn Error + Send + Sync>> {
        let tx = self.tx.lock().await.take();
        Ok(tx.ok_or("Transaction has been consumed")?)
    }

    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.take().await?.commit().await?;
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.take().await?.rollback().await?;
        Ok(())
    }
}

/// Repositories sharing one PostgreSQL transaction. Dropping the session drops the
/// transaction, which sqlx rolls back.
pub struct PostgresSession {
    executor: Executor,
    customer_repository: CustomerRepositoryImpl,
    stage_history_repository: StageHistoryRepositoryImpl,
    user_repository: UserRepositoryImpl,
}

impl PostgresSession {
    pub fn new(executor: Executor) -> Self {
        Self {
            customer_repository: CustomerRepositoryImpl::new(executor.clone()),
            stage_history_repository: StageHistoryRepositoryImpl::new(executor.clone()),
            user_repository: UserRepositoryImpl::new(executor.clone()),
            executor,
        }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

#[async_trait]
impl UnitOfWorkSession for PostgresSession {
    type Customers = CustomerRepositoryImpl;
    type History = StageHistoryRepositoryImpl;
    type Users = UserRepositoryImpl;

    fn customer_repository(&self) -> &CustomerRepositoryImpl {
        &self.customer_repository
    }

    fn stage_history_repository(&self) -> &StageHistoryRepositoryImpl {
        &self.stage_history_repository
    }

    fn user_repository(&self) -> &UserRepositoryImpl {
        &self.user_repository
    }

    async fn commit(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.executor.commit().await?;
        debug!("session committed");
        Ok(())
    }

    async fn rollback(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.executor.rollback().await?;
        debug!("session rolled back");
        Ok(())
    }
}
