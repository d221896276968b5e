use async_trait::async_trait;

#[async_trait]
pub trait FindByUsername<T>: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
