//! Business logic layer.
//!
//! Services orchestrate repositories and enforce domain rules. Each service borrows
//! the database connection for the duration of a request and returns domain models
//! that controllers convert to DTOs.

pub mod auth;
pub mod booking;
pub mod feedback;
pub mod property;
pub mod user;

#[cfg(test)]
mod test;
