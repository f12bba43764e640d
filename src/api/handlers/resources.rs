//! Generic CRUD handlers shared by articles, journalists and categories.
//!
//! Each handler is instantiated per resource, e.g. `get(list_handler::<Article>)`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::resource::Resource;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_id;

/// Reads a JSON body, falling back to an empty request when the body is
/// absent, not JSON, or does not fit the request shape.
fn body_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable body, using empty request");
            T::default()
        }
    }
}

fn to_item<R: Resource>(entity: R) -> R::Item {
    <R::Item as From<R>>::from(entity)
}

/// Resolves an id path segment. A segment that is not a number cannot match
/// any entity and is reported as not found.
fn resolve_id<R: Resource>(raw: &str) -> Result<i64, AppError> {
    parse_id(raw).ok_or_else(|| {
        AppError::not_found(format!("{} not found", R::RESOURCE), json!({ "id": raw }))
    })
}

/// Lists every entity of the resource in insertion order.
///
/// # Endpoint
///
/// `GET /{resource}`
pub async fn list_handler<R: Resource>(State(state): State<AppState>) -> Json<Vec<R::Item>> {
    let entities = R::service(&state).list().await;
    Json(entities.into_iter().map(to_item::<R>).collect())
}

/// Returns a single entity.
///
/// # Endpoint
///
/// `GET /{resource}/{id}`
///
/// # Errors
///
/// Returns 404 if no entity has this id.
pub async fn get_handler<R: Resource>(
    Path(raw): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<R::Item>, AppError> {
    let id = resolve_id::<R>(&raw)?;
    let entity = R::service(&state).get(id).await?;
    Ok(Json(to_item(entity)))
}

/// Creates an entity and returns it with its assigned id.
///
/// # Endpoint
///
/// `POST /{resource}`
///
/// # Errors
///
/// Returns 400 if a required field is missing or falsy. An unreadable body
/// counts as one with every field missing.
pub async fn create_handler<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<R::CreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<R::Item>), AppError> {
    let payload = body_or_empty(payload);
    payload.validate()?;

    let created = R::service(&state).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(to_item(created))))
}

/// Partially updates an entity.
///
/// # Endpoint
///
/// `PUT /{resource}/{id}`
///
/// Fields that are absent or `null` keep their current value. An unreadable
/// body changes nothing.
///
/// # Errors
///
/// Returns 404 if no entity has this id.
pub async fn update_handler<R: Resource>(
    Path(raw): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<R::UpdateRequest>, JsonRejection>,
) -> Result<Json<R::Item>, AppError> {
    let id = resolve_id::<R>(&raw)?;
    let payload = body_or_empty(payload);

    let updated = R::service(&state).update(id, payload.into()).await?;

    Ok(Json(to_item(updated)))
}

/// Deletes an entity.
///
/// # Endpoint
///
/// `DELETE /{resource}/{id}`
///
/// Articles referencing a deleted journalist or category are kept.
///
/// # Errors
///
/// Returns 404 if no entity has this id.
pub async fn delete_handler<R: Resource>(
    Path(raw): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = resolve_id::<R>(&raw)?;
    R::service(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
