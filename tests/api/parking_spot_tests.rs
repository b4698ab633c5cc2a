//! Parking Spot API Tests
//!
//! Request-shape coverage: routing, body validation, nested car
//! validation, and path rejections.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

const VALID_SPOT: &str = r#"{"spotNumber":"701-A","owner":"Jade","apartment":"701","block":"I"}"#;

#[tokio::test]
async fn test_create_spot_with_blank_owner_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/parking-spot",
            r#"{"spotNumber":"701-A","owner":"","apartment":"701","block":"I"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Owner must not be blank"));
}

#[tokio::test]
async fn test_create_spot_with_overlong_spot_number_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/parking-spot",
            r#"{"spotNumber":"701-A-EXTRA-LONG","owner":"Jade","apartment":"701","block":"I"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_spot_with_invalid_nested_car_is_rejected() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/parking-spot/update/0a96e04e-b60f-4b69-9524-e221cf341ccb",
            r#"{"spotNumber":"701-A","owner":"Jade","apartment":"701","block":"I",
                "car":{"licensePlate":"BAD","carBrand":"Audi","carModel":"A1","carColor":"Silver"}}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_spot_with_car_rejects_malformed_car_id() {
    let app = TestApp::new();

    let response = app.post_json("/parking-spot/car/not-a-uuid", VALID_SPOT).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_spot_with_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/parking-spot/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_without_verb_path_is_method_not_allowed() {
    let app = TestApp::new();

    let response = app
        .delete("/parking-spot/0a96e04e-b60f-4b69-9524-e221cf341ccb")
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
