//! ParkingSpot entity and repository trait.
//!
//! Maps to the `parking_spot` table. The car association is an explicit
//! nullable `car_id` join column rather than a bidirectional object link;
//! repositories materialize the attached car with a LEFT JOIN.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::car::Car;
use crate::shared::error::AppError;

/// Represents a condominium parking spot with an optionally attached car.
///
/// Maps to the `parking_spot` table:
/// - id: UUID PRIMARY KEY
/// - spot_number: VARCHAR(10) NOT NULL UNIQUE
/// - registration_date: TIMESTAMPTZ NOT NULL
/// - owner: VARCHAR(130) NOT NULL
/// - apartment: VARCHAR(30) NOT NULL
/// - block: VARCHAR(30) NOT NULL
/// - car_id: UUID NULL UNIQUE REFERENCES car(id)
///
/// `(apartment, block)` is unique as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    /// Server-assigned identifier (primary key)
    pub id: Uuid,

    /// Spot number painted on the floor (unique)
    pub spot_number: String,

    /// Set once at creation, preserved by updates (UTC)
    pub registration_date: DateTime<Utc>,

    /// Name of the resident the spot belongs to
    pub owner: String,

    /// Apartment identifier
    pub apartment: String,

    /// Block identifier
    pub block: String,

    /// Car currently assigned to the spot, if any
    pub car: Option<Car>,
}

/// Repository trait for ParkingSpot data access operations.
#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    /// Find a parking spot by its identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError>;

    /// Find a parking spot by its spot number.
    async fn find_by_spot_number(&self, spot_number: &str)
        -> Result<Option<ParkingSpot>, AppError>;

    /// Find a parking spot by apartment identifier.
    async fn find_by_apartment(&self, apartment: &str) -> Result<Option<ParkingSpot>, AppError>;

    /// Find a parking spot by owner name, matched case-insensitively.
    async fn find_by_owner(&self, owner: &str) -> Result<Option<ParkingSpot>, AppError>;

    /// List every parking spot.
    async fn find_all(&self) -> Result<Vec<ParkingSpot>, AppError>;

    /// Create a new parking spot. `spot.car` becomes the `car_id` join column.
    async fn create(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError>;

    /// Update a parking spot's scalar fields and, when a car is attached,
    /// the attached car's scalar fields. Registration date and the car
    /// association itself are left untouched.
    async fn update(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError>;

    /// Delete a parking spot together with its attached car, if any.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Check if a spot number is already registered.
    async fn spot_number_exists(&self, spot_number: &str) -> Result<bool, AppError>;

    /// Check if the (apartment, block) pair is already registered.
    async fn apartment_and_block_exists(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, AppError>;

    /// Check if a car is already attached to some spot.
    async fn car_is_assigned(&self, car_id: Uuid) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spot(car: Option<Car>) -> ParkingSpot {
        ParkingSpot {
            id: Uuid::parse_str("0a96e04e-b60f-4b69-9524-e221cf341ccb").unwrap(),
            spot_number: "701-A".into(),
            registration_date: "2023-04-12T08:30:00Z".parse().unwrap(),
            owner: "Jade".into(),
            apartment: "701".into(),
            block: "I".into(),
            car,
        }
    }

    #[test]
    fn test_spot_without_car_serializes_null_car() {
        let json = serde_json::to_value(sample_spot(None)).unwrap();
        assert_eq!(json["spotNumber"], "701-A");
        assert_eq!(json["registrationDate"], "2023-04-12T08:30:00Z");
        assert_eq!(json["owner"], "Jade");
        assert!(json["car"].is_null());
    }

    #[test]
    fn test_spot_with_car_embeds_car_object() {
        let car = Car {
            id: Uuid::new_v4(),
            license_plate: "GPK-6219".into(),
            car_brand: "Audi".into(),
            car_model: "A1".into(),
            car_color: "Silver".into(),
        };
        let json = serde_json::to_value(sample_spot(Some(car))).unwrap();
        assert_eq!(json["car"]["licensePlate"], "GPK-6219");
        assert_eq!(json["car"]["carBrand"], "Audi");
    }

    #[test]
    fn test_spot_json_roundtrip() {
        let spot = sample_spot(Some(Car {
            id: Uuid::new_v4(),
            license_plate: "XYZ-9876".into(),
            car_brand: "VW".into(),
            car_model: "Golf".into(),
            car_color: "Blue".into(),
        }));

        let json = serde_json::to_string(&spot).unwrap();
        let back: ParkingSpot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spot);
    }
}
