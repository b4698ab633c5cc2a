//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CarInputDto, ParkingSpotInputDto};

/// Car create/update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    #[validate(length(min = 7, max = 8, message = "License plate must be 7-8 characters"))]
    pub license_plate: String,

    #[validate(length(min = 1, max = 70, message = "Brand must not be blank"))]
    pub car_brand: String,

    #[validate(length(min = 1, max = 70, message = "Model must not be blank"))]
    pub car_model: String,

    #[validate(length(min = 1, max = 70, message = "Color must not be blank"))]
    pub car_color: String,
}

impl CarRequest {
    pub fn into_dto(self) -> CarInputDto {
        CarInputDto {
            license_plate: self.license_plate,
            car_brand: self.car_brand,
            car_model: self.car_model,
            car_color: self.car_color,
        }
    }
}

/// Parking spot create/update request.
///
/// The nested `car` object is accepted everywhere but only takes effect on
/// update, where it rewrites the attached car's fields.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotRequest {
    #[validate(length(min = 1, max = 10, message = "Spot number must not be blank"))]
    pub spot_number: String,

    #[validate(length(min = 1, max = 130, message = "Owner must not be blank"))]
    pub owner: String,

    #[validate(length(min = 1, max = 30, message = "Apartment must not be blank"))]
    pub apartment: String,

    #[validate(length(min = 1, max = 30, message = "Block must not be blank"))]
    pub block: String,

    #[validate(nested)]
    pub car: Option<CarRequest>,
}

impl ParkingSpotRequest {
    pub fn into_dto(self) -> ParkingSpotInputDto {
        ParkingSpotInputDto {
            spot_number: self.spot_number,
            owner: self.owner,
            apartment: self.apartment,
            block: self.block,
            car: self.car.map(CarRequest::into_dto),
        }
    }
}

/// Query parameters for GET /cars/license-plate
#[derive(Debug, Deserialize)]
pub struct LicensePlateQuery {
    #[serde(default)]
    pub number: String,
}

/// Query parameters for GET /parking-spot/spot-number
#[derive(Debug, Deserialize)]
pub struct SpotNumberQuery {
    #[serde(default)]
    pub spot: String,
}

/// Query parameters for GET /parking-spot/apartment
#[derive(Debug, Deserialize)]
pub struct ApartmentQuery {
    #[serde(default)]
    pub number: String,
}

/// Query parameters for GET /parking-spot/owner
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn car_request(plate: &str) -> CarRequest {
        CarRequest {
            license_plate: plate.into(),
            car_brand: "Audi".into(),
            car_model: "A1".into(),
            car_color: "Silver".into(),
        }
    }

    #[test_case("GPK-6219" => true; "eight characters pass")]
    #[test_case("GPK6219" => true; "seven characters pass")]
    #[test_case("GPK-62190" => false; "nine characters fail")]
    #[test_case("GPK-62" => false; "six characters fail")]
    #[test_case("" => false; "blank fails")]
    fn license_plate_length(plate: &str) -> bool {
        car_request(plate).validate().is_ok()
    }

    #[test]
    fn test_blank_brand_fails_validation() {
        let mut request = car_request("GPK-6219");
        request.car_brand = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_car_request_accepts_camel_case_json() {
        let request: CarRequest = serde_json::from_str(
            r#"{"licensePlate":"GPK-6219","carBrand":"Audi","carModel":"A1","carColor":"Silver"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.license_plate, "GPK-6219");
    }

    #[test]
    fn test_spot_request_rejects_blank_fields() {
        let request = ParkingSpotRequest {
            spot_number: "701-A".into(),
            owner: String::new(),
            apartment: "701".into(),
            block: "I".into(),
            car: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_spot_request_validates_nested_car() {
        let request = ParkingSpotRequest {
            spot_number: "701-A".into(),
            owner: "Jade".into(),
            apartment: "701".into(),
            block: "I".into(),
            car: Some(car_request("BAD")),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_query_param_defaults_to_empty() {
        let query: OwnerQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.name, "");
    }
}
