//! DTOs for journalist endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Journalist, JournalistPatch, NewJournalist};

/// Request body for `POST /journalists`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateJournalistRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

/// Request body for `PUT /journalists/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateJournalistRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Journalist representation returned by the API.
#[derive(Debug, Serialize)]
pub struct JournalistItem {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<CreateJournalistRequest> for NewJournalist {
    fn from(r: CreateJournalistRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

impl From<UpdateJournalistRequest> for JournalistPatch {
    fn from(r: UpdateJournalistRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

impl From<Journalist> for JournalistItem {
    fn from(j: Journalist) -> Self {
        Self {
            id: j.id,
            name: j.name,
            email: j.email,
        }
    }
}
