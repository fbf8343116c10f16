//! SeaORM entities for the staybook schema.

pub mod prelude;

pub mod booking;
pub mod feedback;
pub mod property;
pub mod user;
