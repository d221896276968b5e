use async_trait::async_trait;
use parking_lot::Mutex;
use std::error::Error;
use std::sync::Arc;

use crate::models::customer::{ContactChanges, CustomerModel, StageUpdate};
use crate::repository::{
    create_batch::CreateBatch, find_all::FindAll, find_by_owner::FindByOwner, load_batch::LoadBatch,
    update_contact_info::UpdateContactInfo, update_stage::UpdateStage,
};

use super::store::{next_id, MemoryState};

pub struct MemoryCustomerRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryCustomerRepository {
    pub(crate) fn new(state: Arc<Mutex<MemoryState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CreateBatch<CustomerModel> for MemoryCustomerRepository {
    async fn create_batch(
        &self,
        items: Vec<CustomerModel>,
    ) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        let mut saved = Vec::with_capacity(items.len());
        for mut item in items {
            item.id = next_id(&mut state.last_customer_id);
            state.customers.push(item.clone());
            saved.push(item);
        }
        Ok(saved)
    }
}

#[async_trait]
impl LoadBatch<CustomerModel> for MemoryCustomerRepository {
    async fn load_batch(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Option<CustomerModel>>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(ids
            .iter()
            .map(|id| state.customers.iter().find(|c| c.id == *id).cloned())
            .collect())
    }
}

#[async_trait]
impl FindAll<CustomerModel> for MemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.state.lock().customers.clone())
    }
}

#[async_trait]
impl FindByOwner<CustomerModel> for MemoryCustomerRepository {
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(state
            .customers
            .iter()
            .filter(|customer| customer.owner.as_str() == owner)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UpdateContactInfo for MemoryCustomerRepository {
    async fn update_contact_info(
        &self,
        id: i64,
        changes: &ContactChanges,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        match state.customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                changes.apply_to(customer);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UpdateStage for MemoryCustomerRepository {
    async fn update_stage(
        &self,
        id: i64,
        update: &StageUpdate,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        match state.customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                update.apply_to(customer);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
