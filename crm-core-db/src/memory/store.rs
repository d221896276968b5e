use async_trait::async_trait;
use parking_lot::Mutex as ParkingMutex;
use std::error::Error;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::models::customer::CustomerModel;
use crate::models::history::StageHistoryModel;
use crate::models::user::UserModel;
use crate::repository::unit_of_work::{UnitOfWork, UnitOfWorkSession};

use super::{MemoryCustomerRepository, MemoryStageHistoryRepository, MemoryUserRepository};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryState {
    pub customers: Vec<CustomerModel>,
    /// Append order, which is also chronological order
    pub history: Vec<StageHistoryModel>,
    pub users: Vec<UserModel>,
    pub last_customer_id: i64,
    pub last_history_id: i64,
    pub last_user_id: i64,
}

pub(crate) fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}

pub struct InMemoryStore {
    committed: Arc<Mutex<MemoryState>>,
    fail_appends: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            committed: Arc::new(Mutex::new(MemoryState::default())),
            fail_appends: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every ledger append fail, to exercise rollback paths
    #[cfg(test)]
    pub(crate) fn fail_appends(&self, fail: bool) {
        self.fail_appends
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    /// Writes a row as-is, bypassing the service, to stand in for data written by older
    /// versions of the application
    #[cfg(test)]
    pub(crate) async fn seed_customer(&self, mut customer: CustomerModel) -> i64 {
        let mut state = self.committed.lock().await;
        customer.id = next_id(&mut state.last_customer_id);
        let id = customer.id;
        state.customers.push(customer);
        id
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemorySession {
    committed: OwnedMutexGuard<MemoryState>,
    working: Arc<ParkingMutex<MemoryState>>,
    customer_repository: MemoryCustomerRepository,
    stage_history_repository: MemoryStageHistoryRepository,
    user_repository: MemoryUserRepository,
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    type Session = MemorySession;

    async fn begin(&self) -> Result<MemorySession, Box<dyn Error + Send + Sync>> {
        let committed = self.committed.clone().lock_owned().await;
        let working = Arc::new(ParkingMutex::new((*committed).clone()));
        Ok(MemorySession {
            committed,
            customer_repository: MemoryCustomerRepository::new(working.clone()),
            stage_history_repository: MemoryStageHistoryRepository::new(
                working.clone(),
                self.fail_appends.clone(),
            ),
            user_repository: MemoryUserRepository::new(working.clone()),
            working,
        })
    }
}

#[async_trait]
impl UnitOfWorkSession for MemorySession {
    type Customers = MemoryCustomerRepository;
    type History = MemoryStageHistoryRepository;
    type Users = MemoryUserRepository;

    fn customer_repository(&self) -> &MemoryCustomerRepository {
        &self.customer_repository
    }

    fn stage_history_repository(&self) -> &MemoryStageHistoryRepository {
        &self.stage_history_repository
    }

    fn user_repository(&self) -> &MemoryUserRepository {
        &self.user_repository
    }

    async fn commit(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let MemorySession {
            mut committed,
            working,
            ..
        } = self;
        let state = working.lock().clone();
        *committed = state;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
