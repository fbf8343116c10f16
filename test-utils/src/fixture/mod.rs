//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of entity ⇄ domain conversions and DTO mapping.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let booking = fixture::booking::entity();
//!
//! let cancelled = fixture::booking::entity_builder()
//!     .status("cancelled")
//!     .build();
//! ```

pub mod booking;
pub mod property;

pub use booking::{entity as booking_entity, entity_builder as booking_entity_builder};
pub use property::entity as property_entity;
