//! API route configuration.

use crate::api::handlers::{
    category_articles_handler, create_handler, delete_handler, get_handler,
    journalist_articles_handler, list_handler, update_handler,
};
use crate::api::resource::Resource;
use crate::domain::entities::{Article, Category, Journalist};
use crate::state::AppState;
use axum::{Router, routing::get};

/// The five CRUD routes of one resource.
///
/// # Endpoints
///
/// - `GET    /{resource}`       - List all entities
/// - `POST   /{resource}`       - Create an entity
/// - `GET    /{resource}/{id}`  - Fetch one entity
/// - `PUT    /{resource}/{id}`  - Partially update an entity
/// - `DELETE /{resource}/{id}`  - Delete an entity
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(R::PATH, get(list_handler::<R>).post(create_handler::<R>))
        .route(
            &format!("{}/{{id}}", R::PATH),
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
}

/// Relationship routes.
///
/// - `GET /journalists/{id}/articles` - Articles by journalist
/// - `GET /categories/{id}/articles`  - Articles by category
pub fn relation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/journalists/{id}/articles",
            get(journalist_articles_handler),
        )
        .route("/categories/{id}/articles", get(category_articles_handler))
}

/// All resource and relationship routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Article>())
        .merge(resource_routes::<Journalist>())
        .merge(resource_routes::<Category>())
        .merge(relation_routes())
}
