//! In-memory implementation of the domain repositories.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Article, Entity};
use crate::domain::repositories::{ArticleIndex, EntityRepository};
use crate::domain::store::{IdStrategy, StoreError};
use crate::domain::{Collection, Newsroom};

/// Repository holding the [`Newsroom`] aggregate behind a single lock.
///
/// Reads share the lock and mutations take it exclusively, so every
/// operation runs to completion before a conflicting one starts. Nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryNewsroom {
    inner: RwLock<Newsroom>,
}

impl InMemoryNewsroom {
    /// Creates a repository with empty collections.
    pub fn new(strategy: IdStrategy) -> Self {
        debug!(%strategy, "Creating in-memory newsroom");
        Self::with_newsroom(Newsroom::new(strategy))
    }

    /// Wraps an existing aggregate, e.g. one populated with seed data.
    pub fn with_newsroom(newsroom: Newsroom) -> Self {
        Self {
            inner: RwLock::new(newsroom),
        }
    }
}

#[async_trait]
impl<T> EntityRepository<T> for InMemoryNewsroom
where
    T: Entity,
    Newsroom: Collection<T>,
{
    async fn list(&self) -> Vec<T> {
        let newsroom = self.inner.read().await;
        Collection::<T>::collection(&*newsroom).list_all().to_vec()
    }

    async fn count(&self) -> usize {
        let newsroom = self.inner.read().await;
        Collection::<T>::collection(&*newsroom).len()
    }

    async fn find_by_id(&self, id: i64) -> Result<T, StoreError> {
        let newsroom = self.inner.read().await;
        Collection::<T>::collection(&*newsroom).get_by_id(id).cloned()
    }

    async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        let mut newsroom = self.inner.write().await;
        Collection::<T>::collection_mut(&mut *newsroom)
            .create(draft)
            .cloned()
    }

    async fn update(&self, id: i64, patch: T::Patch) -> Result<T, StoreError> {
        let mut newsroom = self.inner.write().await;
        Collection::<T>::collection_mut(&mut *newsroom)
            .update(id, patch)
            .cloned()
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut newsroom = self.inner.write().await;
        Collection::<T>::collection_mut(&mut *newsroom).delete_by_id(id)
    }
}

#[async_trait]
impl ArticleIndex for InMemoryNewsroom {
    async fn articles_by_journalist(&self, journalist_id: i64) -> Result<Vec<Article>, StoreError> {
        let newsroom = self.inner.read().await;
        let articles = newsroom.relations().articles_by_journalist(journalist_id)?;
        Ok(articles.into_iter().cloned().collect())
    }

    async fn articles_by_category(&self, category_id: i64) -> Result<Vec<Article>, StoreError> {
        let newsroom = self.inner.read().await;
        let articles = newsroom.relations().articles_by_category(category_id)?;
        Ok(articles.into_iter().cloned().collect())
    }
}
