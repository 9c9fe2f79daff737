//! Clinic management service library
//!
//! A role-based REST backend for a clinic: patients, doctors and admins
//! authenticate with JWT bearer tokens and the router gates each route on
//! the caller's role.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;
