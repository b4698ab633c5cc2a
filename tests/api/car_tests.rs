//! Car API Tests
//!
//! Request-shape coverage: routing, body validation, and path rejections.
//! These run against the real router; anything that needs a live database
//! is covered by the service-level tests with mocked repositories.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_create_car_with_short_plate_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/cars",
            r#"{"licensePlate":"GPK-62","carBrand":"Audi","carModel":"A1","carColor":"Silver"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("License plate must be 7-8 characters"));
}

#[tokio::test]
async fn test_create_car_with_blank_brand_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/cars",
            r#"{"licensePlate":"GPK-6219","carBrand":"","carModel":"A1","carColor":"Silver"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_car_with_missing_fields_is_unprocessable() {
    let app = TestApp::new();

    // Missing fields fail JSON deserialization before validation runs.
    let response = app.post_json("/cars", "{}").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_car_with_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/cars/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_car_with_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/cars/update/not-a-uuid",
            r#"{"licensePlate":"GPK-6219","carBrand":"Audi","carModel":"A1","carColor":"Silver"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_without_verb_path_is_method_not_allowed() {
    let app = TestApp::new();

    // Deletes go through /cars/delete/{id}; a bare DELETE on the resource
    // path is not part of the surface.
    let response = app
        .delete("/cars/3e01ec1b-85c1-4892-bf11-c02eca5b198c")
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/car").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
