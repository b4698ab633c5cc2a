//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! - **CarService**: Car registry management
//! - **ParkingSpotService**: Parking spot management and car assignment

pub mod car_service;
pub mod parking_spot_service;

// Re-export car service types
pub use car_service::{CarError, CarInputDto, CarService, CarServiceImpl};

// Re-export parking spot service types
pub use parking_spot_service::{
    ParkingSpotError, ParkingSpotInputDto, ParkingSpotService, ParkingSpotServiceImpl,
};
