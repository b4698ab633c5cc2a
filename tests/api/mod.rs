//! REST API endpoint tests

mod car_tests;
mod health_tests;
mod parking_spot_tests;
