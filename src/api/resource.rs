//! Binding between domain entities and their REST representation.
//!
//! Implementing [`Resource`] for an entity is all it takes to expose it under
//! the five CRUD routes built by [`crate::api::routes::resource_routes`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::dto::article::{ArticleItem, CreateArticleRequest, UpdateArticleRequest};
use crate::api::dto::category::{CategoryItem, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::dto::journalist::{
    CreateJournalistRequest, JournalistItem, UpdateJournalistRequest,
};
use crate::application::services::ResourceService;
use crate::domain::entities::{Article, Category, Entity, Journalist};
use crate::state::AppState;

pub trait Resource: Entity {
    /// Collection path, e.g. `/articles`.
    const PATH: &'static str;

    type Item: Serialize + From<Self> + Send + 'static;
    type CreateRequest: DeserializeOwned + Default + Validate + Into<Self::Draft> + Send + 'static;
    type UpdateRequest: DeserializeOwned + Default + Into<Self::Patch> + Send + 'static;

    /// The service managing this collection.
    fn service(state: &AppState) -> &ResourceService<Self>;
}

impl Resource for Article {
    const PATH: &'static str = "/articles";

    type Item = ArticleItem;
    type CreateRequest = CreateArticleRequest;
    type UpdateRequest = UpdateArticleRequest;

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.articles
    }
}

impl Resource for Journalist {
    const PATH: &'static str = "/journalists";

    type Item = JournalistItem;
    type CreateRequest = CreateJournalistRequest;
    type UpdateRequest = UpdateJournalistRequest;

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.journalists
    }
}

impl Resource for Category {
    const PATH: &'static str = "/categories";

    type Item = CategoryItem;
    type CreateRequest = CreateCategoryRequest;
    type UpdateRequest = UpdateCategoryRequest;

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.categories
    }
}
