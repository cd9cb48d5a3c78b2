mod common;

use axum::Router;
use common::{names, prices, send, test_app};
use http::StatusCode;
use serde_json::json;

async fn seeded_app() -> Router {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        "POST",
        "/products/all",
        Some(json!([
            {"name": "Product 1", "price": 12.5},
            {"name": "Product 2", "price": 34.7},
            {"name": "Product 3", "price": 11.6}
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    app
}

#[tokio::test]
async fn test_price_between() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        "GET",
        "/products/query/price-between?minPrice=10&maxPrice=15",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body), vec![12.5, 11.6]);
}

#[tokio::test]
async fn test_price_between_bounds() {
    let app = seeded_app().await;

    let (status, _) = send(
        &app,
        "GET",
        "/products/query/price-between?minPrice=0&maxPrice=15",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "GET",
        "/products/query/price-between?minPrice=10&maxPrice=-1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing parameter
    let (status, body) = send(&app, "GET", "/products/query/price-between?minPrice=10", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Inverted range matches nothing
    let (status, body) = send(
        &app,
        "GET",
        "/products/query/price-between?minPrice=15&maxPrice=10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_price_greater_than() {
    let app = seeded_app().await;
    let (status, body) = send(&app, "GET", "/products/query/price-greater-than?price=12.5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body), vec![34.7]);

    let (status, _) = send(&app, "GET", "/products/query/price-greater-than?price=100", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/products/query/price-greater-than?price=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/products/query/price-greater-than?price=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sorted() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/products/query/sorted?sortBy=price&ascending=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body), vec![11.6, 12.5, 34.7]);

    let (_, body) = send(&app, "GET", "/products/query/sorted?sortBy=price&ascending=false", None).await;
    assert_eq!(prices(&body), vec![34.7, 12.5, 11.6]);

    // ascending defaults to true
    let (_, body) = send(&app, "GET", "/products/query/sorted?sortBy=price", None).await;
    assert_eq!(prices(&body), vec![11.6, 12.5, 34.7]);

    let (status, body) = send(&app, "GET", "/products/query/sorted?sortBy=createdAt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Product 1", "Product 2", "Product 3"]);
}

#[tokio::test]
async fn test_sorted_invalid_field() {
    let app = seeded_app().await;
    let (status, body) = send(&app, "GET", "/products/query/sorted?sortBy=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Sort field must be 'createdAt' or 'price'");
    assert_eq!(body["details"]["sortBy"], "bogus");
}

#[tokio::test]
async fn test_sorted_empty_store() {
    let app = test_app().await;
    let (status, _) = send(&app, "GET", "/products/query/sorted?sortBy=price", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_name_containing() {
    let app = seeded_app().await;
    let (status, body) = send(&app, "GET", "/products/query/name-containing?name=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Product 2"]);

    let (status, _) = send(&app, "GET", "/products/query/name-containing?name=zzz", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/products/query/name-containing", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
