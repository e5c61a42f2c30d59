mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (repo, _pool) = common::create_sqlite_repository().await;
    let server = common::create_test_server(repo);

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_endpoint_closed_pool() {
    let (repo, pool) = common::create_sqlite_repository().await;
    let server = common::create_test_server(repo);

    pool.close().await;

    let response = server.get("/healthz").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Database connection failed");
}

#[tokio::test]
async fn test_health_endpoint_closed_memory_store() {
    let repo = common::create_memory_repository();
    let server = common::create_test_server(repo.clone());

    server.get("/healthz").await.assert_status_ok();

    repo.close();

    server
        .get("/healthz")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_endpoint_wrong_method() {
    let server = common::create_test_server(common::create_memory_repository());

    let response = server.post("/healthz").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_endpoint_head_is_not_allowed() {
    let repo = common::create_memory_repository();
    let server = common::create_test_server(repo.clone());
    repo.close();

    // 405 rather than 500: the closed store is never pinged.
    let response = server.method(Method::HEAD, "/healthz").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
