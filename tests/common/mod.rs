#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use newsroom::api::handlers::health_handler;
use newsroom::api::routes::api_routes;
use newsroom::domain::{IdStrategy, Newsroom};
use newsroom::infrastructure::memory::{InMemoryNewsroom, seed};
use newsroom::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state(newsroom: Newsroom) -> AppState {
    AppState::new(Arc::new(InMemoryNewsroom::with_newsroom(newsroom)))
}

pub fn make_server_with(newsroom: Newsroom) -> TestServer {
    let state = create_test_state(newsroom);
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(api_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn make_server() -> TestServer {
    make_server_with(Newsroom::new(IdStrategy::Sequential))
}

pub fn make_seeded_server() -> TestServer {
    make_server_with(seed::seeded(IdStrategy::Sequential).unwrap())
}

pub async fn create_journalist(server: &TestServer, name: &str, email: &str) -> Value {
    server
        .post("/journalists")
        .json(&json!({ "name": name, "email": email }))
        .await
        .json::<Value>()
}

pub async fn create_category(server: &TestServer, name: &str) -> Value {
    server
        .post("/categories")
        .json(&json!({ "name": name }))
        .await
        .json::<Value>()
}

pub async fn create_article(
    server: &TestServer,
    title: &str,
    journalist_id: i64,
    category_id: i64,
) -> Value {
    server
        .post("/articles")
        .json(&json!({
            "title": title,
            "content": format!("Content of {title}"),
            "journalistId": journalist_id,
            "categoryId": category_id
        }))
        .await
        .json::<Value>()
}
