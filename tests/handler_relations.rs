mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_articles_by_journalist_scenario() {
    let server = common::make_server();

    let journalist = common::create_journalist(&server, "A", "a@x.com").await;
    let category = common::create_category(&server, "Tech").await;
    let article = server
        .post("/articles")
        .json(&json!({ "title": "T", "content": "C", "journalistId": 1, "categoryId": 1 }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(journalist["id"], 1);
    assert_eq!(category["id"], 1);
    assert_eq!(article["id"], 1);

    let response = server.get("/journalists/1/articles").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([article]));

    server
        .delete("/articles/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/journalists/1/articles").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "No articles found for this journalist"
    );
}

#[tokio::test]
async fn test_articles_by_journalist_filters_in_order() {
    let server = common::make_server();
    common::create_article(&server, "one", 1, 1).await;
    common::create_article(&server, "two", 2, 1).await;
    common::create_article(&server, "three", 1, 2).await;

    let response = server.get("/journalists/1/articles").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["one", "three"]);
}

#[tokio::test]
async fn test_articles_by_category() {
    let server = common::make_seeded_server();

    let response = server.get("/categories/1/articles").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|a| a["categoryId"] == 1));
}

#[tokio::test]
async fn test_articles_by_category_empty() {
    let server = common::make_server();
    common::create_category(&server, "Empty").await;

    let response = server.get("/categories/1/articles").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "No articles found for this category"
    );
}

#[tokio::test]
async fn test_articles_by_journalist_non_numeric() {
    let server = common::make_seeded_server();

    let response = server.get("/journalists/abc/articles").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "No articles found for this journalist"
    );
}
