use async_trait::async_trait;

use crate::models::customer::StageUpdate;

/// Repository trait for the customer side of a stage transition.
///
/// Only the cached status and the stage amounts are touched; the ledger entry is written
/// by the caller in the same session.
#[async_trait]
pub trait UpdateStage: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - The row existed and was updated
    /// * `Ok(false)` - No customer has this id
    /// * `Err` - An error if the statement could not be executed
    async fn update_stage(
        &self,
        id: i64,
        update: &StageUpdate,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
