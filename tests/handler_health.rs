mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["collections"]["articles"], 0);
}

#[tokio::test]
async fn test_health_endpoint_counts_seed_data() {
    let server = common::make_seeded_server();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("version").is_some());
    assert_eq!(json["collections"]["articles"], 4);
    assert_eq!(json["collections"]["journalists"], 3);
    assert_eq!(json["collections"]["categories"], 3);
}
