//! Parking Spot Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::request::{
    ApartmentQuery, OwnerQuery, ParkingSpotRequest, SpotNumberQuery,
};
use crate::application::dto::response::ParkingSpotResponse;
use crate::application::services::{
    ParkingSpotError, ParkingSpotService, ParkingSpotServiceImpl,
};
use crate::infrastructure::repositories::{PgCarRepository, PgParkingSpotRepository};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn spot_service(
    state: &AppState,
) -> ParkingSpotServiceImpl<PgParkingSpotRepository, PgCarRepository> {
    ParkingSpotServiceImpl::new(
        Arc::new(PgParkingSpotRepository::new(state.db.clone())),
        Arc::new(PgCarRepository::new(state.db.clone())),
    )
}

fn map_spot_error(e: ParkingSpotError) -> AppError {
    match e {
        ParkingSpotError::NotFound => AppError::NotFound("Parking spot not found.".into()),
        ParkingSpotError::CarNotFound => AppError::NotFound("Car not found.".into()),
        ParkingSpotError::SpotNumberTaken => {
            AppError::Conflict("Conflict: Parking Spot is already in use!".into())
        }
        ParkingSpotError::ApartmentBlockTaken => AppError::Conflict(
            "Conflict: Parking Spot is already registered for this apartment and block!".into(),
        ),
        ParkingSpotError::CarAlreadyAssigned => {
            AppError::Conflict("Conflict: Car is already assigned to a parking spot!".into())
        }
        ParkingSpotError::Conflict(msg) => AppError::Conflict(format!("Conflict: {}", msg)),
        ParkingSpotError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Register a new parking spot
pub async fn create_spot(
    State(state): State<AppState>,
    Json(body): Json<ParkingSpotRequest>,
) -> Result<impl IntoResponse, AppError> {
    body.validate().map_err(validation_error)?;

    let spot = spot_service(&state)
        .create_spot(body.into_dto())
        .await
        .map_err(map_spot_error)?;

    Ok((StatusCode::CREATED, Json(ParkingSpotResponse::from(spot))))
}

/// Register a new parking spot with an existing car attached
pub async fn create_spot_with_car(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    Json(body): Json<ParkingSpotRequest>,
) -> Result<impl IntoResponse, AppError> {
    body.validate().map_err(validation_error)?;

    let spot = spot_service(&state)
        .create_spot_with_car(car_id, body.into_dto())
        .await
        .map_err(map_spot_error)?;

    Ok((StatusCode::CREATED, Json(ParkingSpotResponse::from(spot))))
}

/// List every parking spot
pub async fn list_spots(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingSpotResponse>>, AppError> {
    let spots = spot_service(&state)
        .list_spots()
        .await
        .map_err(map_spot_error)?;

    Ok(Json(spots.into_iter().map(ParkingSpotResponse::from).collect()))
}

/// Get spot by ID
pub async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    let spot = spot_service(&state)
        .get_spot(id)
        .await
        .map_err(map_spot_error)?;

    Ok(Json(ParkingSpotResponse::from(spot)))
}

/// Get spot by spot number (?spot=)
pub async fn get_spot_by_spot_number(
    State(state): State<AppState>,
    Query(query): Query<SpotNumberQuery>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    let spot = spot_service(&state)
        .get_spot_by_spot_number(&query.spot)
        .await
        .map_err(map_spot_error)?;

    Ok(Json(ParkingSpotResponse::from(spot)))
}

/// Get spot by apartment (?number=)
pub async fn get_spot_by_apartment(
    State(state): State<AppState>,
    Query(query): Query<ApartmentQuery>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    let spot = spot_service(&state)
        .get_spot_by_apartment(&query.number)
        .await
        .map_err(map_spot_error)?;

    Ok(Json(ParkingSpotResponse::from(spot)))
}

/// Get spot by owner name, case-insensitive (?name=)
pub async fn get_spot_by_owner(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    let spot = spot_service(&state)
        .get_spot_by_owner(&query.name)
        .await
        .map_err(map_spot_error)?;

    Ok(Json(ParkingSpotResponse::from(spot)))
}

/// Replace a spot's fields, including the attached car's fields
pub async fn update_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ParkingSpotRequest>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let spot = spot_service(&state)
        .update_spot(id, body.into_dto())
        .await
        .map_err(map_spot_error)?;

    Ok(Json(ParkingSpotResponse::from(spot)))
}

/// Delete a spot together with its attached car
pub async fn delete_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    spot_service(&state)
        .delete_spot(id)
        .await
        .map_err(map_spot_error)?;

    Ok(StatusCode::NO_CONTENT)
}
