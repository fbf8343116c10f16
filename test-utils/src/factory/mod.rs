//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships through the
//! `helpers` module, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let property = factory::property::create_property(&db).await?;
//!
//!     // Create a booking with all dependencies
//!     let (user, property, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, property.id, user.id)
//!     .check_in(NaiveDate::from_ymd_opt(2099, 1, 10).unwrap())
//!     .check_out(NaiveDate::from_ymd_opt(2099, 1, 12).unwrap())
//!     .status("cancelled")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod feedback;
pub mod helpers;
pub mod property;
pub mod user;

pub use booking::create_booking;
pub use feedback::create_feedback;
pub use property::create_property;
pub use user::create_user;
