//! Patio core - domain types for the parking management client.
//!
//! Plate normalization and validation, wire DTOs for the parking API,
//! and display formatting helpers. No I/O lives here.

pub mod format;
pub mod models;
pub mod plate;

pub use format::format_date_time;
pub use models::{
    ActiveVehicle, Credentials, LoginResponse, Receipt, RegisterRequest, RegisterResponse,
    UserProfile, VehicleRecord,
};
pub use plate::{is_valid, normalize, Plate, PlateError};
