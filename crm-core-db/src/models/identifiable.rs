/// Trait for entities that can be uniquely identified by a store-assigned integer id
pub trait Identifiable {
    /// Returns the unique identifier of the entity (0 until the store assigns one)
    fn get_id(&self) -> i64;
}
