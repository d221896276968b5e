use async_trait::async_trait;

use crate::models::customer::CustomerModel;
use crate::models::history::StageHistoryModel;
use crate::models::user::UserModel;
use crate::repository::{
    append::Append, create_batch::CreateBatch, find_all::FindAll,
    find_by_customer_id::FindByCustomerId, find_by_owner::FindByOwner, find_by_role::FindByRole,
    find_by_username::FindByUsername, find_page::FindPage, load_batch::LoadBatch,
    update_contact_info::UpdateContactInfo, update_stage::UpdateStage,
};

/// Everything the service needs from the customer relation
pub trait CustomerRepository:
    CreateBatch<CustomerModel>
    + LoadBatch<CustomerModel>
    + FindAll<CustomerModel>
    + FindByOwner<CustomerModel>
    + UpdateContactInfo
    + UpdateStage
{
}

impl<R> CustomerRepository for R where
    R: CreateBatch<CustomerModel>
        + LoadBatch<CustomerModel>
        + FindAll<CustomerModel>
        + FindByOwner<CustomerModel>
        + UpdateContactInfo
        + UpdateStage
{
}

/// Everything the service needs from the stage history ledger
pub trait StageHistoryRepository:
    Append<StageHistoryModel>
    + FindByCustomerId<StageHistoryModel>
    + FindAll<StageHistoryModel>
    + FindPage<StageHistoryModel>
{
}

impl<R> StageHistoryRepository for R where
    R: Append<StageHistoryModel>
        + FindByCustomerId<StageHistoryModel>
        + FindAll<StageHistoryModel>
        + FindPage<StageHistoryModel>
{
}

pub trait UserRepository:
    CreateBatch<UserModel> + FindByRole<UserModel> + FindByUsername<UserModel>
{
}

impl<R> UserRepository for R where
    R: CreateBatch<UserModel> + FindByRole<UserModel> + FindByUsername<UserModel>
{
}

/// A store that hands out transactional sessions.
///
/// The store is constructed once at process start and shared by reference; there is no
/// ambient connection state.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Session: UnitOfWorkSession;

    /// Start a session; all repositories it hands out share one transaction
    async fn begin(&self) -> Result<Self::Session, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repositories bound to one transaction.
///
/// Nothing written through a session is visible to other sessions before `commit`.
/// Dropping a session without committing rolls it back.
#[async_trait]
pub trait UnitOfWorkSession: Send + Sync + Sized {
    type Customers: CustomerRepository;
    type History: StageHistoryRepository;
    type Users: UserRepository;

    fn customer_repository(&self) -> &Self::Customers;

    fn stage_history_repository(&self) -> &Self::History;

    fn user_repository(&self) -> &Self::Users;

    async fn commit(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn rollback(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
