//! Data model module

pub mod admin;
pub mod appointment;
pub mod auth;
pub mod doctor;
pub mod patient;
pub mod role;
