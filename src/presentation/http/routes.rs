//! Route Configuration
//!
//! Configures all HTTP routes for the API. The paths mirror the original
//! service surface: `/cars` and `/parking-spot` with `update/{id}` and
//! `delete/{id}` verbs spelled into the path.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/cars", car_routes())
        .nest("/parking-spot", parking_spot_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Car routes
fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::car::create_car))
        .route("/", get(handlers::car::list_cars))
        .route("/license-plate", get(handlers::car::get_car_by_license_plate))
        .route("/{id}", get(handlers::car::get_car))
        .route("/update/{id}", put(handlers::car::update_car))
        .route("/delete/{id}", delete(handlers::car::delete_car))
}

/// Parking spot routes
fn parking_spot_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::parking_spot::create_spot))
        .route("/", get(handlers::parking_spot::list_spots))
        .route("/car/{car_id}", post(handlers::parking_spot::create_spot_with_car))
        .route("/spot-number", get(handlers::parking_spot::get_spot_by_spot_number))
        .route("/apartment", get(handlers::parking_spot::get_spot_by_apartment))
        .route("/owner", get(handlers::parking_spot::get_spot_by_owner))
        .route("/{id}", get(handlers::parking_spot::get_spot))
        .route("/update/{id}", put(handlers::parking_spot::update_spot))
        .route("/delete/{id}", delete(handlers::parking_spot::delete_spot))
}
