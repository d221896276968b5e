use async_trait::async_trait;
use parking_lot::Mutex;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::history::StageHistoryModel;
use crate::repository::{
    append::Append,
    find_all::FindAll,
    find_by_customer_id::FindByCustomerId,
    find_page::FindPage,
    pagination::{Page, PageRequest},
};

use super::store::{next_id, MemoryState};

pub struct MemoryStageHistoryRepository {
    state: Arc<Mutex<MemoryState>>,
    fail_appends: Arc<AtomicBool>,
}

impl MemoryStageHistoryRepository {
    pub(crate) fn new(state: Arc<Mutex<MemoryState>>, fail_appends: Arc<AtomicBool>) -> Self {
        Self { state, fail_appends }
    }
}

#[async_trait]
impl Append<StageHistoryModel> for MemoryStageHistoryRepository {
    async fn append(
        &self,
        mut entry: StageHistoryModel,
    ) -> Result<StageHistoryModel, Box<dyn Error + Send + Sync>> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err("stage history is not writable".into());
        }

        let mut state = self.state.lock();
        let antecedent_hash = state
            .history
            .iter()
            .rev()
            .find(|existing| existing.customer_id == entry.customer_id)
            .map(|existing| existing.hash)
            .unwrap_or(0);
        entry.seal(antecedent_hash)?;
        entry.id = next_id(&mut state.last_history_id);
        state.history.push(entry.clone());
        Ok(entry)
    }
}

#[async_trait]
impl FindByCustomerId<StageHistoryModel> for MemoryStageHistoryRepository {
    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<StageHistoryModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(state
            .history
            .iter()
            .rev()
            .filter(|entry| entry.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FindAll<StageHistoryModel> for MemoryStageHistoryRepository {
    async fn find_all(&self) -> Result<Vec<StageHistoryModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(state.history.iter().rev().cloned().collect())
    }
}

#[async_trait]
impl FindPage<StageHistoryModel> for MemoryStageHistoryRepository {
    async fn find_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<StageHistoryModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        let newest_first: Vec<StageHistoryModel> = state.history.iter().rev().cloned().collect();
        Ok(Page::from_slice(&newest_first, page))
    }
}
