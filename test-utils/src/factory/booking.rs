//! Booking factory for creating test reservations.
//!
//! Rows are inserted directly, bypassing the overlap check, so tests can set up
//! arbitrary (including historical) booking states.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, property.id, user.id)
///     .check_in(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
///     .check_out(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap())
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    property_id: i32,
    user_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in: 7 days from today (UTC)
    /// - check_out: 9 days from today (UTC)
    /// - status: `"active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `property_id` - Property the booking is for
    /// - `user_id` - User who holds the booking
    pub fn new(db: &'a DatabaseConnection, property_id: i32, user_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            property_id,
            user_id,
            check_in: today + Days::new(7),
            check_out: today + Days::new(9),
            status: "active".to_string(),
        }
    }

    pub fn check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = check_out;
        self
    }

    /// Sets the raw status column value (`active`, `completed` or `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            property_id: ActiveValue::Set(self.property_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking with default dates.
pub async fn create_booking(
    db: &DatabaseConnection,
    property_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, property_id, user_id).build().await
}
