use async_trait::async_trait;
use parking_lot::Mutex;
use std::error::Error;
use std::sync::Arc;

use crate::models::user::{UserModel, UserRole};
use crate::repository::{
    create_batch::CreateBatch, find_by_role::FindByRole, find_by_username::FindByUsername,
};

use super::store::{next_id, MemoryState};

pub struct MemoryUserRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryUserRepository {
    pub(crate) fn new(state: Arc<Mutex<MemoryState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CreateBatch<UserModel> for MemoryUserRepository {
    async fn create_batch(
        &self,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        let mut saved = Vec::with_capacity(items.len());
        for mut item in items {
            if state.users.iter().any(|user| user.username == item.username) {
                return Err(format!("username {} is taken", item.username).into());
            }
            item.id = next_id(&mut state.last_user_id);
            state.users.push(item.clone());
            saved.push(item);
        }
        Ok(saved)
    }
}

#[async_trait]
impl FindByRole<UserModel> for MemoryUserRepository {
    async fn find_by_role(&self, role: UserRole) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        let mut users: Vec<UserModel> = state
            .users
            .iter()
            .filter(|user| user.role == role)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[async_trait]
impl FindByUsername<UserModel> for MemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }
}
