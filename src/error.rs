use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation { missing, .. } => {
                AppError::bad_request("Missing required fields", json!({ "fields": missing }))
            }
            StoreError::NotFound { resource, id } => {
                AppError::not_found(format!("{resource} not found"), json!({ "id": id }))
            }
            StoreError::NoRelatedArticles { parent, id } => AppError::not_found(
                format!("No articles found for this {parent}"),
                json!({ "id": id }),
            ),
        }
    }
}

/// Presence checks on request DTOs report the same error as the store.
impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut fields: Vec<String> = e
            .field_errors()
            .keys()
            .map(|field| camel_case(field))
            .collect();
        fields.sort();

        AppError::bad_request("Missing required fields", json!({ "fields": fields }))
    }
}

/// `journalist_id` -> `journalistId`, matching the JSON field names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_message() {
        let err = AppError::from(StoreError::NotFound {
            resource: "Journalist",
            id: 7,
        });

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.message(), "Journalist not found");
    }

    #[test]
    fn test_store_validation_lists_fields() {
        let err = AppError::from(StoreError::Validation {
            resource: "Article",
            missing: vec!["title", "categoryId"],
        });

        match err {
            AppError::Validation { message, details } => {
                assert_eq!(message, "Missing required fields");
                assert_eq!(details, json!({ "fields": ["title", "categoryId"] }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_related_articles_message() {
        let err = AppError::from(StoreError::NoRelatedArticles {
            parent: "category",
            id: 3,
        });

        assert_eq!(err.message(), "No articles found for this category");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("journalist_id"), "journalistId");
        assert_eq!(camel_case("title"), "title");
    }

    #[test]
    fn test_error_response_status() {
        let response = AppError::not_found("Article not found", Value::Null).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::bad_request("Missing required fields", Value::Null).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
