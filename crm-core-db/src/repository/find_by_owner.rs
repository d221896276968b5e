use async_trait::async_trait;

/// Repository trait for the customers owned by one representative, in insertion order.
#[async_trait]
pub trait FindByOwner<T>: Send + Sync {
    /// # Arguments
    /// * `owner` - Representative display name, matched exactly
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
