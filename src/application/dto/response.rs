//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Car, ParkingSpot};

/// Car response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub car_brand: String,
    pub car_model: String,
    pub car_color: String,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            license_plate: car.license_plate,
            car_brand: car.car_brand,
            car_model: car.car_model,
            car_color: car.car_color,
        }
    }
}

/// Parking spot response with the attached car embedded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotResponse {
    pub id: Uuid,
    pub spot_number: String,
    pub registration_date: DateTime<Utc>,
    pub owner: String,
    pub apartment: String,
    pub block: String,
    pub car: Option<CarResponse>,
}

impl From<ParkingSpot> for ParkingSpotResponse {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            id: spot.id,
            spot_number: spot.spot_number,
            registration_date: spot.registration_date,
            owner: spot.owner,
            apartment: spot.apartment,
            block: spot.block,
            car: spot.car.map(CarResponse::from),
        }
    }
}
