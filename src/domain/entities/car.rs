//! Car entity and repository trait.
//!
//! Maps to the `car` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a registered car.
///
/// Maps to the `car` table:
/// - id: UUID PRIMARY KEY
/// - license_plate: VARCHAR(8) NOT NULL UNIQUE
/// - car_brand: VARCHAR(70) NOT NULL
/// - car_model: VARCHAR(70) NOT NULL
/// - car_color: VARCHAR(70) NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Server-assigned identifier (primary key)
    pub id: Uuid,

    /// License plate (7-8 characters, unique)
    pub license_plate: String,

    /// Manufacturer name
    pub car_brand: String,

    /// Model name
    pub car_model: String,

    /// Body color
    pub car_color: String,
}

/// Repository trait for Car data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Find a car by its identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError>;

    /// Find a car by its license plate.
    async fn find_by_license_plate(&self, license_plate: &str) -> Result<Option<Car>, AppError>;

    /// List every registered car.
    async fn find_all(&self) -> Result<Vec<Car>, AppError>;

    /// Create a new car in the database.
    async fn create(&self, car: &Car) -> Result<Car, AppError>;

    /// Update an existing car, rewriting all scalar fields.
    async fn update(&self, car: &Car) -> Result<Car, AppError>;

    /// Delete a car by identifier.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Check if a license plate is already registered.
    async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError>;
}
