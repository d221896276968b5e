use async_trait::async_trait;

/// Repository trait for the ledger entries of one customer, newest first.
#[async_trait]
pub trait FindByCustomerId<T>: Send + Sync {
    async fn find_by_customer_id(&self, customer_id: i64) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
