//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON request and response bodies and carry OpenAPI
//! schemas for the generated documentation.

pub mod api;
pub mod booking;
pub mod feedback;
pub mod property;
pub mod user;
