//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RelationService, ResourceService};
use crate::domain::entities::{Article, Category, Journalist};
use crate::infrastructure::memory::InMemoryNewsroom;

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<ResourceService<Article>>,
    pub journalists: Arc<ResourceService<Journalist>>,
    pub categories: Arc<ResourceService<Category>>,
    pub relations: Arc<RelationService>,
}

impl AppState {
    /// Wires every service to one in-memory repository.
    pub fn new(repository: Arc<InMemoryNewsroom>) -> Self {
        Self {
            articles: Arc::new(ResourceService::<Article>::new(repository.clone())),
            journalists: Arc::new(ResourceService::<Journalist>::new(repository.clone())),
            categories: Arc::new(ResourceService::<Category>::new(repository.clone())),
            relations: Arc::new(RelationService::new(repository)),
        }
    }
}
