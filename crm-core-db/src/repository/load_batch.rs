use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Loads records by id.
///
/// The result has one slot per requested id, in request order: `Some` for a stored
/// record and `None` for an unknown id. An id requested twice fills both slots.
#[async_trait]
pub trait LoadBatch<T: Identifiable>: Send + Sync {
    async fn load_batch(&self, ids: &[i64]) -> Result<Vec<Option<T>>, Box<dyn std::error::Error + Send + Sync>>;
}
