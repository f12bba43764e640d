//! Repository trait for relationship queries.

use crate::domain::entities::Article;
use crate::domain::store::StoreError;
use async_trait::async_trait;

/// Answers "all articles referencing X" queries.
///
/// Results are computed from the article collection at call time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleIndex: Send + Sync {
    /// Articles whose `journalist_id` matches, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoRelatedArticles`] when nothing matches.
    async fn articles_by_journalist(&self, journalist_id: i64) -> Result<Vec<Article>, StoreError>;

    /// Articles whose `category_id` matches, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoRelatedArticles`] when nothing matches.
    async fn articles_by_category(&self, category_id: i64) -> Result<Vec<Article>, StoreError>;
}
