use async_trait::async_trait;

/// Repository trait for reading a whole relation.
///
/// Customers come back in insertion order, ledger entries newest first.
#[async_trait]
pub trait FindAll<T>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
