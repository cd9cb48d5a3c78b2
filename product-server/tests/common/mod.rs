#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use product_server::ServerState;
use serde_json::Value;
use tower::ServiceExt;

/// Full router over a fresh in-memory database
pub async fn test_app() -> Router {
    let state = ServerState::for_test().await.unwrap();
    product_server::api::router(state)
}

/// Send a request and decode the JSON body (`Value::Null` when empty)
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// POST /products, asserting 201
pub async fn create(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/products",
        Some(serde_json::json!({ "name": name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create {name}: {body}");
    body
}

pub fn prices(body: &Value) -> Vec<f64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect()
}

pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}
