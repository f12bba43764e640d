//! Handlers for relationship endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::article::ArticleItem;
use crate::domain::entities::Article;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_id;

fn no_articles(parent: &str, raw: &str) -> AppError {
    AppError::not_found(
        format!("No articles found for this {parent}"),
        json!({ "id": raw }),
    )
}

fn to_items(articles: Vec<Article>) -> Json<Vec<ArticleItem>> {
    Json(articles.into_iter().map(ArticleItem::from).collect())
}

/// Lists the articles written by a journalist.
///
/// # Endpoint
///
/// `GET /journalists/{id}/articles`
///
/// # Errors
///
/// Returns 404 when no article references the journalist. The journalist
/// itself is not looked up.
pub async fn journalist_articles_handler(
    Path(raw): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleItem>>, AppError> {
    let id = parse_id(&raw).ok_or_else(|| no_articles("journalist", &raw))?;
    let articles = state.relations.articles_by_journalist(id).await?;
    Ok(to_items(articles))
}

/// Lists the articles filed under a category.
///
/// # Endpoint
///
/// `GET /categories/{id}/articles`
///
/// # Errors
///
/// Returns 404 when no article references the category.
pub async fn category_articles_handler(
    Path(raw): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleItem>>, AppError> {
    let id = parse_id(&raw).ok_or_else(|| no_articles("category", &raw))?;
    let articles = state.relations.articles_by_category(id).await?;
    Ok(to_items(articles))
}
