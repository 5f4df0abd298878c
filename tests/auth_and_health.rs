mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn resource_routes_require_the_token() {
    let app = app(seeded_store());
    for uri in ["/api/leads", "/api/leads/1", "/api/pipelines", "/api/pipelines/1"] {
        let res = send_with_token(&app, Method::GET, uri, None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(res.body, error_message("Unauthorized request"));

        let res = send_with_token(&app, Method::GET, uri, Some("wrong-token")).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn auth_runs_before_the_not_found_guard() {
    let app = app(seeded_store());
    let res = send_with_token(&app, Method::DELETE, "/api/leads/12345", None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_passes() {
    let app = app(seeded_store());
    let res = send_with_token(&app, Method::GET, "/api/pipelines", Some(TOKEN)).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn health_and_ready_need_no_token() {
    let app = app(seeded_store());
    let res = send_with_token(&app, Method::GET, "/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "status": "ok" }));

    let res = send_with_token(&app, Method::GET, "/ready", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "status": "ok", "database": "ok" }));

    let res = send_with_token(&app, Method::GET, "/version", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "leads-api");
}
