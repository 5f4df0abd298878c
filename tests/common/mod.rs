//! Shared fixtures and request helpers for the router tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use leads_api::schema::{LEADS, PIPELINES};
use leads_api::{build_app, AppConfig, AppState, MemoryStore, Row};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const TOKEN: &str = "test-token";

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/leads_test".into(),
        api_token: TOKEN.into(),
        bind_addr: [127, 0, 0, 1].into(),
        port: 0,
        api_prefix: "/api".into(),
        db_max_connections: 1,
        body_limit_bytes: 64 * 1024,
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    build_app(AppState::new(store, TOKEN), &test_config())
}

fn as_row(v: Value) -> Row {
    match v {
        Value::Object(m) => m,
        other => panic!("fixture is not an object: {other}"),
    }
}

pub fn pipelines_fixture() -> Vec<Value> {
    vec![
        json!({ "id": 1, "title": "Cold Leads", "team_id": 1 }),
        json!({ "id": 2, "title": "Warm Leads", "team_id": 1 }),
        json!({ "id": 3, "title": "Closing", "team_id": 2 }),
    ]
}

pub fn leads_fixture() -> Vec<Value> {
    let rows = [
        (1, "Darryl Jonesy", "djonesy@fightingirish.com", "Albany", 1, 1),
        (2, "Jared Pinto", "jp@letterkenny.com", "Albany", 2, 1),
        (3, "Jane Keeso", "jk@clover.com", "New York", 2, 1),
        (4, "Mike Miyagi", "miyagi@karatekid.com", "New York", 1, 1),
        (5, "Tyler Indelicato", "ti@imalosertroll.com", "Ronkonkoma", 1, 2),
        (6, "William Ferris", "william@thebestest.com", "Smithtown", 1, 2),
        (7, "Chris Ferguson", "fergie@notablackeyedpea.com", "Port Jefferson", 1, 3),
    ];
    rows.iter()
        .map(|(id, name, email, city, assigned_to, pipeline_id)| {
            json!({
                "id": id,
                "name": name,
                "phone": "123-456-7890",
                "email": email,
                "city": city,
                "state": "New York",
                "cold_caller": 3,
                "assigned_to": assigned_to,
                "date_created": "2020-03-13T05:51:57.628Z",
                "last_updated": "2020-03-13T05:51:57.628Z",
                "pipeline_id": pipeline_id
            })
        })
        .collect()
}

pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store
        .seed(&PIPELINES, pipelines_fixture().into_iter().map(as_row))
        .unwrap();
    store.seed(&LEADS, leads_fixture().into_iter().map(as_row)).unwrap();
    Arc::new(store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is empty.
    pub body: Value,
}

pub async fn dispatch(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse { status, headers, body }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    match body {
        Some(b) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Authorized request.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    dispatch(app, request(method, uri, Some(TOKEN), body)).await
}

pub async fn send_with_token(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
) -> TestResponse {
    dispatch(app, request(method, uri, token, None)).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, content_type: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

pub fn error_message(message: &str) -> Value {
    json!({ "error": { "message": message } })
}
