//! Car Service
//!
//! Handles car registry operations: create with a license plate uniqueness
//! rule, lookups by id and plate, full-field update, and delete.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Car, CarRepository};
use crate::shared::error::AppError;

/// Car service trait
#[async_trait]
pub trait CarService: Send + Sync {
    /// Register a new car; fails if the license plate is taken
    async fn create_car(&self, input: CarInputDto) -> Result<Car, CarError>;

    /// List every registered car
    async fn list_cars(&self) -> Result<Vec<Car>, CarError>;

    /// Get car by ID
    async fn get_car(&self, id: Uuid) -> Result<Car, CarError>;

    /// Get car by license plate
    async fn get_car_by_license_plate(&self, license_plate: &str) -> Result<Car, CarError>;

    /// Rewrite all scalar fields of an existing car from the input
    async fn update_car(&self, id: Uuid, input: CarInputDto) -> Result<Car, CarError>;

    /// Remove a car from the registry
    async fn delete_car(&self, id: Uuid) -> Result<(), CarError>;
}

/// Incoming car fields, already validated at the presentation boundary
#[derive(Debug, Clone)]
pub struct CarInputDto {
    pub license_plate: String,
    pub car_brand: String,
    pub car_model: String,
    pub car_color: String,
}

/// Car service errors
#[derive(Debug, thiserror::Error)]
pub enum CarError {
    #[error("Car not found")]
    NotFound,

    #[error("License plate already in use")]
    LicensePlateTaken,

    #[error("Car is assigned to a parking spot")]
    Assigned,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CarError {
    fn from_repo(e: AppError) -> Self {
        match e {
            AppError::NotFound(_) => Self::NotFound,
            // The only unique constraint on `car` is the license plate.
            AppError::Conflict(msg) if msg.starts_with("License plate") => {
                Self::LicensePlateTaken
            }
            AppError::Conflict(_) => Self::Assigned,
            e => Self::Internal(e.to_string()),
        }
    }
}

/// CarService implementation
pub struct CarServiceImpl<R>
where
    R: CarRepository,
{
    car_repo: Arc<R>,
}

impl<R> CarServiceImpl<R>
where
    R: CarRepository,
{
    pub fn new(car_repo: Arc<R>) -> Self {
        Self { car_repo }
    }
}

#[async_trait]
impl<R> CarService for CarServiceImpl<R>
where
    R: CarRepository + 'static,
{
    async fn create_car(&self, input: CarInputDto) -> Result<Car, CarError> {
        let exists = self
            .car_repo
            .license_plate_exists(&input.license_plate)
            .await
            .map_err(|e| CarError::Internal(e.to_string()))?;

        if exists {
            return Err(CarError::LicensePlateTaken);
        }

        let car = Car {
            id: Uuid::new_v4(),
            license_plate: input.license_plate,
            car_brand: input.car_brand,
            car_model: input.car_model,
            car_color: input.car_color,
        };

        self.car_repo.create(&car).await.map_err(CarError::from_repo)
    }

    async fn list_cars(&self) -> Result<Vec<Car>, CarError> {
        self.car_repo
            .find_all()
            .await
            .map_err(|e| CarError::Internal(e.to_string()))
    }

    async fn get_car(&self, id: Uuid) -> Result<Car, CarError> {
        self.car_repo
            .find_by_id(id)
            .await
            .map_err(|e| CarError::Internal(e.to_string()))?
            .ok_or(CarError::NotFound)
    }

    async fn get_car_by_license_plate(&self, license_plate: &str) -> Result<Car, CarError> {
        self.car_repo
            .find_by_license_plate(license_plate)
            .await
            .map_err(|e| CarError::Internal(e.to_string()))?
            .ok_or(CarError::NotFound)
    }

    async fn update_car(&self, id: Uuid, input: CarInputDto) -> Result<Car, CarError> {
        let existing = self
            .car_repo
            .find_by_id(id)
            .await
            .map_err(|e| CarError::Internal(e.to_string()))?
            .ok_or(CarError::NotFound)?;

        // Moving to a plate held by a different car is a conflict.
        if input.license_plate != existing.license_plate {
            let exists = self
                .car_repo
                .license_plate_exists(&input.license_plate)
                .await
                .map_err(|e| CarError::Internal(e.to_string()))?;

            if exists {
                return Err(CarError::LicensePlateTaken);
            }
        }

        let car = Car {
            id: existing.id,
            license_plate: input.license_plate,
            car_brand: input.car_brand,
            car_model: input.car_model,
            car_color: input.car_color,
        };

        self.car_repo.update(&car).await.map_err(CarError::from_repo)
    }

    async fn delete_car(&self, id: Uuid) -> Result<(), CarError> {
        self.car_repo.delete(id).await.map_err(CarError::from_repo)
    }
}
