//! Handler tests for the catalog domain
//!
//! Drive the product and category routers directly with `oneshot`, backed by
//! the in-memory repositories:
//! - Status codes per operation
//! - Response bodies and the page envelope
//! - Error bodies for missing, dependent and malformed input

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const EXISTING_ID: i64 = 1;
const NONEXISTING_ID: i64 = 2;
const DEPENDENT_ID: i64 = 3;

fn categories() -> InMemoryCategoryRepository {
    InMemoryCategoryRepository::with_categories(vec![
        Category {
            id: 1,
            name: "Books".to_string(),
        },
        common::create_category(),
        Category {
            id: 3,
            name: "Computers".to_string(),
        },
    ])
}

fn products_app() -> Router {
    let products = InMemoryProductRepository::with_products(vec![
        common::create_product().with_id(EXISTING_ID),
        common::create_product().with_id(DEPENDENT_ID),
    ])
    .with_dependents([DEPENDENT_ID]);

    handlers::products_router(ProductService::new(products, categories()))
}

fn categories_app() -> Router {
    handlers::categories_router(CategoryService::new(categories()))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_find_all_returns_page() {
    let response = products_app()
        .oneshot(request("GET", "/?page=0&size=12&sort=name"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalElements"], 2);
    assert_eq!(body["number"], 0);
    assert_eq!(body["size"], 12);
    assert_eq!(body["first"], true);
    assert_eq!(body["last"], true);
}

#[tokio::test]
async fn test_find_all_rejects_bad_sort() {
    let response = products_app()
        .oneshot(request("GET", "/?sort=color"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_find_by_id_existing() {
    let response = products_app()
        .oneshot(request("GET", &format!("/{}", EXISTING_ID)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], EXISTING_ID);
    assert_eq!(body["name"], "Phone");
    assert_eq!(body["description"], "Good Phone");
    assert_eq!(body["categories"][0]["name"], "Electronics");
}

#[tokio::test]
async fn test_find_by_id_nonexisting() {
    let response = products_app()
        .oneshot(request("GET", &format!("/{}", NONEXISTING_ID)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_find_by_id_rejects_non_numeric_id() {
    let response = products_app()
        .oneshot(request("GET", "/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_insert_returns_created() {
    let dto = serde_json::to_value(common::create_product_dto()).unwrap();

    let response = products_app()
        .oneshot(json_request("POST", "/", &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/4");

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Phone");
    assert_eq!(body["description"], "Good Phone");
    assert_eq!(body["categories"][0]["name"], "Electronics");
}

#[tokio::test]
async fn test_insert_location_resolves_under_mount_point() {
    let app = Router::new().nest("/api/products", products_app());
    let dto = serde_json::to_value(common::create_product_dto()).unwrap();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/products", &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/api/products/4");

    let response = app.oneshot(request("GET", &location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Phone");
}

#[tokio::test]
async fn test_find_all_page_past_the_end_is_empty() {
    let response = products_app()
        .oneshot(request("GET", "/?page=18446744073709551615&size=100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["empty"], true);
    assert_eq!(body["content"].as_array().unwrap().len(), 0);
    assert_eq!(body["totalElements"], 2);
    assert_eq!(body["size"], 100);
}

#[tokio::test]
async fn test_insert_with_unknown_category() {
    let mut dto = serde_json::to_value(common::create_product_dto()).unwrap();
    dto["categories"] = json!([{ "id": 99 }]);

    let response = products_app()
        .oneshot(json_request("POST", "/", &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_insert_validates_input() {
    let response = products_app()
        .oneshot(json_request(
            "POST",
            "/",
            &json!({ "name": "", "price": -1.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
    assert!(body["details"]["price"].is_array());
}

#[tokio::test]
async fn test_update_existing() {
    let mut dto = serde_json::to_value(common::create_product_dto()).unwrap();
    dto["name"] = json!("Phone 2");

    let response = products_app()
        .oneshot(json_request("PUT", &format!("/{}", EXISTING_ID), &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], EXISTING_ID);
    assert_eq!(body["name"], "Phone 2");
    assert_eq!(body["description"], "Good Phone");
}

#[tokio::test]
async fn test_update_nonexisting() {
    let dto = serde_json::to_value(common::create_product_dto()).unwrap();

    let response = products_app()
        .oneshot(json_request("PUT", &format!("/{}", NONEXISTING_ID), &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_existing() {
    let app = products_app();

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/{}", EXISTING_ID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("GET", &format!("/{}", EXISTING_ID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexisting() {
    let response = products_app()
        .oneshot(request("DELETE", &format!("/{}", NONEXISTING_ID)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_dependent() {
    let response = products_app()
        .oneshot(request("DELETE", &format!("/{}", DEPENDENT_ID)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "DATABASE_INTEGRITY");
    assert_eq!(body["message"], "Integrity violation");
}

#[tokio::test]
async fn test_categories_list_and_get() {
    let app = categories_app();

    let response = app
        .clone()
        .oneshot(request("GET", "/?sort=name&size=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["content"][0]["name"], "Books");
    assert_eq!(body["content"][1]["name"], "Computers");
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 2);

    let response = app.clone().oneshot(request("GET", "/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Electronics");

    let response = app.oneshot(request("GET", "/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
