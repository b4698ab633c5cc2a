//! Parking Spot Service
//!
//! Handles parking spot registration with its two uniqueness rules (spot
//! number; apartment+block pair), the attach-car variant of creation,
//! lookups, full-field update, and cascading delete.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::car_service::CarInputDto;
use crate::domain::{Car, CarRepository, ParkingSpot, ParkingSpotRepository};
use crate::shared::error::AppError;

/// Parking spot service trait
#[async_trait]
pub trait ParkingSpotService: Send + Sync {
    /// Register a new spot with no car attached
    async fn create_spot(&self, input: ParkingSpotInputDto) -> Result<ParkingSpot, ParkingSpotError>;

    /// Register a new spot with an existing car attached by id
    async fn create_spot_with_car(
        &self,
        car_id: Uuid,
        input: ParkingSpotInputDto,
    ) -> Result<ParkingSpot, ParkingSpotError>;

    /// List every parking spot
    async fn list_spots(&self) -> Result<Vec<ParkingSpot>, ParkingSpotError>;

    /// Get spot by ID
    async fn get_spot(&self, id: Uuid) -> Result<ParkingSpot, ParkingSpotError>;

    /// Get spot by spot number
    async fn get_spot_by_spot_number(
        &self,
        spot_number: &str,
    ) -> Result<ParkingSpot, ParkingSpotError>;

    /// Get spot by apartment identifier
    async fn get_spot_by_apartment(
        &self,
        apartment: &str,
    ) -> Result<ParkingSpot, ParkingSpotError>;

    /// Get spot by owner name (case-insensitive)
    async fn get_spot_by_owner(&self, owner: &str) -> Result<ParkingSpot, ParkingSpotError>;

    /// Replace a spot's fields; preserves id and registration date
    async fn update_spot(
        &self,
        id: Uuid,
        input: ParkingSpotInputDto,
    ) -> Result<ParkingSpot, ParkingSpotError>;

    /// Delete a spot together with its attached car
    async fn delete_spot(&self, id: Uuid) -> Result<(), ParkingSpotError>;
}

/// Incoming parking spot fields, already validated at the presentation
/// boundary. The nested car is only honored on update, where it rewrites
/// the attached car's scalar fields.
#[derive(Debug, Clone)]
pub struct ParkingSpotInputDto {
    pub spot_number: String,
    pub owner: String,
    pub apartment: String,
    pub block: String,
    pub car: Option<CarInputDto>,
}

/// Parking spot service errors
#[derive(Debug, thiserror::Error)]
pub enum ParkingSpotError {
    #[error("Parking spot not found")]
    NotFound,

    #[error("Car not found")]
    CarNotFound,

    #[error("Parking spot number already in use")]
    SpotNumberTaken,

    #[error("Apartment and block already registered")]
    ApartmentBlockTaken,

    #[error("Car already assigned to a parking spot")]
    CarAlreadyAssigned,

    /// Unique constraint tripped by a concurrent writer after the
    /// pre-checks passed; carries the constraint's message.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParkingSpotError {
    fn from_repo(e: AppError) -> Self {
        match e {
            AppError::NotFound(_) => Self::NotFound,
            AppError::Conflict(msg) => Self::Conflict(msg),
            e => Self::Internal(e.to_string()),
        }
    }
}

/// ParkingSpotService implementation
pub struct ParkingSpotServiceImpl<S, C>
where
    S: ParkingSpotRepository,
    C: CarRepository,
{
    spot_repo: Arc<S>,
    car_repo: Arc<C>,
}

impl<S, C> ParkingSpotServiceImpl<S, C>
where
    S: ParkingSpotRepository,
    C: CarRepository,
{
    pub fn new(spot_repo: Arc<S>, car_repo: Arc<C>) -> Self {
        Self { spot_repo, car_repo }
    }

    /// Run the two uniqueness pre-checks shared by both creation paths.
    async fn check_duplicates(&self, input: &ParkingSpotInputDto) -> Result<(), ParkingSpotError> {
        let spot_taken = self
            .spot_repo
            .spot_number_exists(&input.spot_number)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?;

        if spot_taken {
            return Err(ParkingSpotError::SpotNumberTaken);
        }

        let pair_taken = self
            .spot_repo
            .apartment_and_block_exists(&input.apartment, &input.block)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?;

        if pair_taken {
            return Err(ParkingSpotError::ApartmentBlockTaken);
        }

        Ok(())
    }
}

#[async_trait]
impl<S, C> ParkingSpotService for ParkingSpotServiceImpl<S, C>
where
    S: ParkingSpotRepository + 'static,
    C: CarRepository + 'static,
{
    async fn create_spot(
        &self,
        input: ParkingSpotInputDto,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        self.check_duplicates(&input).await?;

        let spot = ParkingSpot {
            id: Uuid::new_v4(),
            spot_number: input.spot_number,
            registration_date: Utc::now(),
            owner: input.owner,
            apartment: input.apartment,
            block: input.block,
            car: None,
        };

        self.spot_repo
            .create(&spot)
            .await
            .map_err(ParkingSpotError::from_repo)
    }

    async fn create_spot_with_car(
        &self,
        car_id: Uuid,
        input: ParkingSpotInputDto,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        let car = self
            .car_repo
            .find_by_id(car_id)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?
            .ok_or(ParkingSpotError::CarNotFound)?;

        self.check_duplicates(&input).await?;

        let assigned = self
            .spot_repo
            .car_is_assigned(car_id)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?;

        if assigned {
            return Err(ParkingSpotError::CarAlreadyAssigned);
        }

        let spot = ParkingSpot {
            id: Uuid::new_v4(),
            spot_number: input.spot_number,
            registration_date: Utc::now(),
            owner: input.owner,
            apartment: input.apartment,
            block: input.block,
            car: Some(car),
        };

        self.spot_repo
            .create(&spot)
            .await
            .map_err(ParkingSpotError::from_repo)
    }

    async fn list_spots(&self) -> Result<Vec<ParkingSpot>, ParkingSpotError> {
        self.spot_repo
            .find_all()
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))
    }

    async fn get_spot(&self, id: Uuid) -> Result<ParkingSpot, ParkingSpotError> {
        self.spot_repo
            .find_by_id(id)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?
            .ok_or(ParkingSpotError::NotFound)
    }

    async fn get_spot_by_spot_number(
        &self,
        spot_number: &str,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        self.spot_repo
            .find_by_spot_number(spot_number)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?
            .ok_or(ParkingSpotError::NotFound)
    }

    async fn get_spot_by_apartment(
        &self,
        apartment: &str,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        self.spot_repo
            .find_by_apartment(apartment)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?
            .ok_or(ParkingSpotError::NotFound)
    }

    async fn get_spot_by_owner(&self, owner: &str) -> Result<ParkingSpot, ParkingSpotError> {
        self.spot_repo
            .find_by_owner(owner)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?
            .ok_or(ParkingSpotError::NotFound)
    }

    async fn update_spot(
        &self,
        id: Uuid,
        input: ParkingSpotInputDto,
    ) -> Result<ParkingSpot, ParkingSpotError> {
        let existing = self
            .spot_repo
            .find_by_id(id)
            .await
            .map_err(|e| ParkingSpotError::Internal(e.to_string()))?
            .ok_or(ParkingSpotError::NotFound)?;

        if input.spot_number != existing.spot_number {
            let taken = self
                .spot_repo
                .spot_number_exists(&input.spot_number)
                .await
                .map_err(|e| ParkingSpotError::Internal(e.to_string()))?;

            if taken {
                return Err(ParkingSpotError::SpotNumberTaken);
            }
        }

        if input.apartment != existing.apartment || input.block != existing.block {
            let taken = self
                .spot_repo
                .apartment_and_block_exists(&input.apartment, &input.block)
                .await
                .map_err(|e| ParkingSpotError::Internal(e.to_string()))?;

            if taken {
                return Err(ParkingSpotError::ApartmentBlockTaken);
            }
        }

        // A nested car rewrites the attached car's scalars, keeping the
        // car's id. A nested car on a spot without one is ignored.
        let car = match (existing.car, input.car) {
            (Some(attached), Some(update)) => Some(Car {
                id: attached.id,
                license_plate: update.license_plate,
                car_brand: update.car_brand,
                car_model: update.car_model,
                car_color: update.car_color,
            }),
            (Some(attached), None) => Some(attached),
            (None, _) => None,
        };

        let spot = ParkingSpot {
            id: existing.id,
            spot_number: input.spot_number,
            registration_date: existing.registration_date,
            owner: input.owner,
            apartment: input.apartment,
            block: input.block,
            car,
        };

        self.spot_repo
            .update(&spot)
            .await
            .map_err(ParkingSpotError::from_repo)
    }

    async fn delete_spot(&self, id: Uuid) -> Result<(), ParkingSpotError> {
        self.spot_repo
            .delete(id)
            .await
            .map_err(ParkingSpotError::from_repo)
    }
}
