//! Business logic services layer

pub mod appointment_service;
pub mod auth_service;

pub use appointment_service::AppointmentService;
pub use auth_service::AuthService;
