//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into domain parameters, call
//! the matching service, and convert results back into DTOs.

pub mod auth;
pub mod booking;
pub mod feedback;
pub mod property;
pub mod user;
