//! DTOs for category endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Category, CategoryPatch, NewCategory};

/// Request body for `POST /categories`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

/// Request body for `PUT /categories/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

/// Category representation returned by the API.
#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(r: CreateCategoryRequest) -> Self {
        Self { name: r.name }
    }
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(r: UpdateCategoryRequest) -> Self {
        Self { name: r.name }
    }
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}
