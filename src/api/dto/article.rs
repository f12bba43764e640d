//! DTOs for article endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Article, ArticlePatch, NewArticle};

/// Request body for `POST /articles`.
///
/// Every field is required. Empty strings are rejected like absent fields;
/// a zero id is caught when the article is built.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub content: Option<String>,

    #[validate(required)]
    pub journalist_id: Option<i64>,

    #[validate(required)]
    pub category_id: Option<i64>,
}

/// Request body for `PUT /articles/{id}`.
///
/// Absent and `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub journalist_id: Option<i64>,
    pub category_id: Option<i64>,
}

/// Article representation returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub journalist_id: i64,
    pub category_id: i64,
}

impl From<CreateArticleRequest> for NewArticle {
    fn from(r: CreateArticleRequest) -> Self {
        Self {
            title: r.title,
            content: r.content,
            journalist_id: r.journalist_id,
            category_id: r.category_id,
        }
    }
}

impl From<UpdateArticleRequest> for ArticlePatch {
    fn from(r: UpdateArticleRequest) -> Self {
        Self {
            title: r.title,
            content: r.content,
            journalist_id: r.journalist_id,
            category_id: r.category_id,
        }
    }
}

impl From<Article> for ArticleItem {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            content: a.content,
            journalist_id: a.journalist_id,
            category_id: a.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_camel_case() {
        let request: CreateArticleRequest = serde_json::from_value(json!({
            "title": "T",
            "content": "C",
            "journalistId": 1,
            "categoryId": 2
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.journalist_id, Some(1));
    }

    #[test]
    fn test_create_request_missing_and_falsy() {
        let request: CreateArticleRequest = serde_json::from_value(json!({
            "title": "",
            "content": "C",
            "journalistId": 0
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("category_id"));
    }

    #[test]
    fn test_update_request_null_is_absent() {
        let request: UpdateArticleRequest =
            serde_json::from_value(json!({ "title": null, "content": "New" })).unwrap();

        let patch = ArticlePatch::from(request);

        assert!(patch.title.is_none());
        assert_eq!(patch.content.as_deref(), Some("New"));
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = ArticleItem::from(Article::new(1, "T".into(), "C".into(), 2, 3));

        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({ "id": 1, "title": "T", "content": "C", "journalistId": 2, "categoryId": 3 })
        );
    }
}
