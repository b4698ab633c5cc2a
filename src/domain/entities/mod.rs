//! # Domain Entities
//!
//! Core domain entities for the parking control system. Both entities map
//! directly to their corresponding database tables.
//!
//! - **Car**: A registered car identified by its license plate
//! - **ParkingSpot**: A condominium spot with an optionally attached car
//!
//! Each entity carries an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod car;
mod parking_spot;

pub use car::{Car, CarRepository};
pub use parking_spot::{ParkingSpot, ParkingSpotRepository};
