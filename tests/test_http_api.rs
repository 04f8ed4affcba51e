extern crate itemstore;

use itemstore::warp_api;
use serde_json::json;
use serde_json::Value;
use warp::http::StatusCode;

mod common;

#[tokio::test]
async fn test_add_then_list_over_http() {
    let api = warp_api::api_routes(common::test_pool("http_add_then_list"));

    let response = warp::test::request()
        .method("POST")
        .path("/add")
        .json(&json!({"title": "Book", "price": 9.99, "date": "2024-05-01 10:00:00"}))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(
        created,
        json!({"id": 1, "title": "Book", "price": 9.99, "date": "2024-05-01 10:00:00"})
    );

    let response = warp::test::request().path("/items").reply(&api).await;
    assert_eq!(response.status(), StatusCode::OK);
    let items: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(
        items,
        json!([{"id": 1, "title": "Book", "price": 9.99, "date": "2024-05-01 10:00:00"}])
    );
}

#[tokio::test]
async fn test_add_with_bad_date_returns_400() {
    let api = warp_api::api_routes(common::test_pool("http_bad_date"));

    let response = warp::test::request()
        .method("POST")
        .path("/add")
        .json(&json!({"title": "Book", "price": 9.99, "date": "2024/01/01"}))
        .reply(&api)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(
        body,
        json!({"error": "Invalid date format. Use YYYY-MM-DD HH:MM:SS"})
    );

    // Nothing was persisted by the failed request
    let response = warp::test::request().path("/items").reply(&api).await;
    let items: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn test_list_on_empty_store_over_http() {
    let api = warp_api::api_routes(common::test_pool("http_list_empty"));

    let response = warp::test::request().path("/items").reply(&api).await;
    assert_eq!(response.status(), StatusCode::OK);
    let items: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn test_version_endpoint() {
    let api = warp_api::api_routes(common::test_pool("http_version"));

    let response = warp::test::request().path("/version").reply(&api).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body().as_ref(), env!("CARGO_PKG_VERSION").as_bytes());
}
