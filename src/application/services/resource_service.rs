//! CRUD service shared by every resource type.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Entity;
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;

/// Service for listing, reading and mutating one entity collection.
///
/// Translates store errors into [`AppError`] and logs every mutation.
pub struct ResourceService<T: Entity> {
    repository: Arc<dyn EntityRepository<T>>,
}

impl<T: Entity> ResourceService<T> {
    /// Creates a new resource service.
    pub fn new(repository: Arc<dyn EntityRepository<T>>) -> Self {
        Self { repository }
    }

    /// Lists all entities in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.repository.list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.count().await
    }

    /// Retrieves an entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    pub async fn get(&self, id: i64) -> Result<T, AppError> {
        self.repository.find_by_id(id).await.map_err(|e| {
            debug!(resource = T::RESOURCE, id, "Lookup missed");
            AppError::from(e)
        })
    }

    /// Creates an entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if required fields are missing.
    pub async fn create(&self, draft: T::Draft) -> Result<T, AppError> {
        let created = self.repository.create(draft).await?;
        info!(resource = T::RESOURCE, id = created.id(), "Created");
        Ok(created)
    }

    /// Partially updates an entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    pub async fn update(&self, id: i64, patch: T::Patch) -> Result<T, AppError> {
        let updated = self.repository.update(id, patch).await?;
        info!(resource = T::RESOURCE, id, "Updated");
        Ok(updated)
    }

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        info!(resource = T::RESOURCE, id, "Deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Journalist, JournalistPatch, NewJournalist};
    use crate::domain::store::IdStrategy;
    use crate::infrastructure::memory::InMemoryNewsroom;

    fn service() -> ResourceService<Journalist> {
        let repository = Arc::new(InMemoryNewsroom::new(IdStrategy::Sequential));
        ResourceService::<Journalist>::new(repository)
    }

    fn draft(name: &str) -> NewJournalist {
        NewJournalist {
            name: Some(name.to_string()),
            email: Some(format!("{}@x.com", name.to_lowercase())),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();

        let created = service.create(draft("Ada")).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_invalid() {
        let service = service();

        let result = service.create(NewJournalist::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let service = service();

        let err = service.get(1).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.message(), "Journalist not found");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = service();
        let created = service.create(draft("Ada")).await.unwrap();

        let updated = service
            .update(
                created.id,
                JournalistPatch {
                    name: Some("Grace".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Grace");
        assert_eq!(updated.email, created.email);

        service.delete(created.id).await.unwrap();

        assert!(matches!(
            service.delete(created.id).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
