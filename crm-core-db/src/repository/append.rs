use async_trait::async_trait;

/// Repository trait for append-only relations.
///
/// There is no update or delete counterpart. Implementations assign the id
/// and seal the entry into its hash chain before writing it.
#[async_trait]
pub trait Append<T>: Send + Sync {
    /// Append one entry
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entry with `id`, `antecedent_hash` and `hash` populated
    /// * `Err` - A storage error; nothing is written
    async fn append(&self, entry: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
