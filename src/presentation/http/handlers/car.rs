//! Car Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::request::{CarRequest, LicensePlateQuery};
use crate::application::dto::response::CarResponse;
use crate::application::services::{CarError, CarService, CarServiceImpl};
use crate::infrastructure::repositories::PgCarRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn car_service(state: &AppState) -> CarServiceImpl<PgCarRepository> {
    CarServiceImpl::new(Arc::new(PgCarRepository::new(state.db.clone())))
}

fn map_car_error(e: CarError) -> AppError {
    match e {
        CarError::NotFound => AppError::NotFound("Car not found.".into()),
        CarError::LicensePlateTaken => {
            AppError::Conflict("Conflict: License plate is already in use!".into())
        }
        CarError::Assigned => {
            AppError::Conflict("Conflict: Car is assigned to a parking spot!".into())
        }
        CarError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Register a new car
pub async fn create_car(
    State(state): State<AppState>,
    Json(body): Json<CarRequest>,
) -> Result<impl IntoResponse, AppError> {
    body.validate().map_err(validation_error)?;

    let car = car_service(&state)
        .create_car(body.into_dto())
        .await
        .map_err(map_car_error)?;

    Ok((StatusCode::CREATED, Json(CarResponse::from(car))))
}

/// List every registered car
pub async fn list_cars(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let cars = car_service(&state).list_cars().await.map_err(map_car_error)?;

    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Get car by ID
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarResponse>, AppError> {
    let car = car_service(&state).get_car(id).await.map_err(map_car_error)?;

    Ok(Json(CarResponse::from(car)))
}

/// Get car by license plate (?number=)
pub async fn get_car_by_license_plate(
    State(state): State<AppState>,
    Query(query): Query<LicensePlateQuery>,
) -> Result<Json<CarResponse>, AppError> {
    let car = car_service(&state)
        .get_car_by_license_plate(&query.number)
        .await
        .map_err(map_car_error)?;

    Ok(Json(CarResponse::from(car)))
}

/// Rewrite all fields of an existing car
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let car = car_service(&state)
        .update_car(id, body.into_dto())
        .await
        .map_err(map_car_error)?;

    Ok(Json(CarResponse::from(car)))
}

/// Remove a car from the registry
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    car_service(&state)
        .delete_car(id)
        .await
        .map_err(map_car_error)?;

    Ok(StatusCode::NO_CONTENT)
}
