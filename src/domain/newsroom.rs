//! The aggregate owning all three collections.

use crate::domain::entities::{Article, Category, Journalist};
use crate::domain::relations::RelationalIndex;
use crate::domain::store::{EntityStore, IdStrategy};

/// Every collection of the service, owned in one place.
///
/// There is no global state: the aggregate is created at startup and handed
/// to [`crate::infrastructure::memory::InMemoryNewsroom`], which guards it
/// for concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Newsroom {
    pub articles: EntityStore<Article>,
    pub journalists: EntityStore<Journalist>,
    pub categories: EntityStore<Category>,
}

impl Newsroom {
    /// Creates empty collections sharing one id strategy.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            articles: EntityStore::new(strategy),
            journalists: EntityStore::new(strategy),
            categories: EntityStore::new(strategy),
        }
    }

    pub fn relations(&self) -> RelationalIndex<'_> {
        RelationalIndex::new(&self.articles)
    }
}

/// Selects the collection holding entities of type `T`.
///
/// Lets repository code be written once for every entity type.
pub trait Collection<T> {
    fn collection(&self) -> &EntityStore<T>;
    fn collection_mut(&mut self) -> &mut EntityStore<T>;
}

impl Collection<Article> for Newsroom {
    fn collection(&self) -> &EntityStore<Article> {
        &self.articles
    }

    fn collection_mut(&mut self) -> &mut EntityStore<Article> {
        &mut self.articles
    }
}

impl Collection<Journalist> for Newsroom {
    fn collection(&self) -> &EntityStore<Journalist> {
        &self.journalists
    }

    fn collection_mut(&mut self) -> &mut EntityStore<Journalist> {
        &mut self.journalists
    }
}

impl Collection<Category> for Newsroom {
    fn collection(&self) -> &EntityStore<Category> {
        &self.categories
    }

    fn collection_mut(&mut self) -> &mut EntityStore<Category> {
        &mut self.categories
    }
}
