use async_trait::async_trait;

use crate::models::customer::ContactChanges;

/// Repository trait for overwriting a customer's contact attributes in place.
#[async_trait]
pub trait UpdateContactInfo: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - The row existed and was updated
    /// * `Ok(false)` - No customer has this id; nothing was written
    /// * `Err` - An error if the statement could not be executed
    async fn update_contact_info(
        &self,
        id: i64,
        changes: &ContactChanges,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
