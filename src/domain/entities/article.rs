//! Article entity and its create/update inputs.

use super::{Entity, filled, reference, require};

/// A piece of content linked to one journalist and one category.
///
/// The foreign keys are plain ids. They are not checked against the other
/// collections, so an article may reference a journalist that was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub journalist_id: i64,
    pub category_id: i64,
}

impl Article {
    /// Creates a new Article instance.
    pub fn new(
        id: i64,
        title: String,
        content: String,
        journalist_id: i64,
        category_id: i64,
    ) -> Self {
        Self {
            id,
            title,
            content,
            journalist_id,
            category_id,
        }
    }
}

/// Input data for creating an article.
///
/// Every field is required; they are optional here so that the store can
/// report all missing fields at once.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub journalist_id: Option<i64>,
    pub category_id: Option<i64>,
}

/// Partial update for an existing article.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub journalist_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl Entity for Article {
    const RESOURCE: &'static str = "Article";

    type Draft = NewArticle;
    type Patch = ArticlePatch;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewArticle) -> Result<Self, Vec<&'static str>> {
        let mut missing = Vec::new();
        let title = require(&mut missing, "title", filled(draft.title));
        let content = require(&mut missing, "content", filled(draft.content));
        let journalist_id = require(&mut missing, "journalistId", reference(draft.journalist_id));
        let category_id = require(&mut missing, "categoryId", reference(draft.category_id));

        match (title, content, journalist_id, category_id) {
            (Some(title), Some(content), Some(journalist_id), Some(category_id)) => {
                Ok(Self::new(id, title, content, journalist_id, category_id))
            }
            _ => Err(missing),
        }
    }

    fn apply(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(journalist_id) = patch.journalist_id {
            self.journalist_id = journalist_id;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
    }
}
