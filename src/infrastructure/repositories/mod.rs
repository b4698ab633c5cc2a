//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! - **CarRepository** - Car registry access
//! - **ParkingSpotRepository** - Parking spot access with the car join

pub mod car_repository;
pub mod parking_spot_repository;

pub use car_repository::PgCarRepository;
pub use parking_spot_repository::PgParkingSpotRepository;
