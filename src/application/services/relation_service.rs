//! Relationship query service.

use std::sync::Arc;

use crate::domain::entities::Article;
use crate::domain::repositories::ArticleIndex;
use crate::error::AppError;

/// Service answering "articles by journalist" and "articles by category".
pub struct RelationService {
    index: Arc<dyn ArticleIndex>,
}

impl RelationService {
    /// Creates a new relation service.
    pub fn new(index: Arc<dyn ArticleIndex>) -> Self {
        Self { index }
    }

    /// Lists the articles written by a journalist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article references the journalist,
    /// whether or not the journalist exists.
    pub async fn articles_by_journalist(&self, journalist_id: i64) -> Result<Vec<Article>, AppError> {
        Ok(self.index.articles_by_journalist(journalist_id).await?)
    }

    /// Lists the articles filed under a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article references the category.
    pub async fn articles_by_category(&self, category_id: i64) -> Result<Vec<Article>, AppError> {
        Ok(self.index.articles_by_category(category_id).await?)
    }
}
