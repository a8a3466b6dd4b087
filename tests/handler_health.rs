mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use smartlinks::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["link_store"]["status"], "ok");
    assert_eq!(json["checks"]["link_store"]["message"], "3 links");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("link_store").is_some());
    assert!(json["checks"].get("session_store").is_some());
}

#[tokio::test]
async fn test_health_counts_sessions() {
    let state = common::create_test_state();
    common::session_cookie(&state).await;
    let server = common::make_server(state);

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["session_store"]["message"], "1 active sessions");
}
