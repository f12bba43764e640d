//! Repository trait for entity CRUD.

use crate::domain::entities::Entity;
use crate::domain::store::StoreError;
use async_trait::async_trait;

/// Repository interface for one entity collection.
///
/// Every operation is atomic with respect to the others: implementations
/// must not let a reader observe a half-applied mutation.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryNewsroom`] - in-memory implementation
#[async_trait]
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// Lists all entities in insertion order.
    async fn list(&self) -> Vec<T>;

    /// Number of entities currently stored.
    async fn count(&self) -> usize;

    /// Finds an entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entity has this id.
    async fn find_by_id(&self, id: i64) -> Result<T, StoreError>;

    /// Creates an entity and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if required fields are missing.
    async fn create(&self, draft: T::Draft) -> Result<T, StoreError>;

    /// Applies a partial update and returns the updated entity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entity has this id.
    async fn update(&self, id: i64, patch: T::Patch) -> Result<T, StoreError>;

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entity has this id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
