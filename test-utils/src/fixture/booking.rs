//! Booking fixtures for creating in-memory test data.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::booking;

/// Default property ID for bookings.
pub const DEFAULT_PROPERTY_ID: i32 = 1;

/// Default user ID for bookings.
pub const DEFAULT_USER_ID: i32 = 1;

/// Default status column value.
pub const DEFAULT_STATUS: &str = "active";

fn default_check_in() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 10).unwrap()
}

fn default_check_out() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 12).unwrap()
}

/// Creates a booking entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - property_id: `1`
/// - user_id: `1`
/// - check_in: `2099-01-10`
/// - check_out: `2099-01-12`
/// - status: `"active"`
/// - created_at: `2099-01-01T00:00:00Z`
pub fn entity() -> booking::Model {
    entity_builder().build()
}

/// Creates a booking entity builder for customization.
pub fn entity_builder() -> BookingEntityBuilder {
    BookingEntityBuilder {
        id: 1,
        property_id: DEFAULT_PROPERTY_ID,
        user_id: DEFAULT_USER_ID,
        check_in: default_check_in(),
        check_out: default_check_out(),
        status: DEFAULT_STATUS.to_string(),
    }
}

/// Builder for in-memory booking entities.
pub struct BookingEntityBuilder {
    id: i32,
    property_id: i32,
    user_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: String,
}

impl BookingEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn property_id(mut self, property_id: i32) -> Self {
        self.property_id = property_id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = check_out;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn build(self) -> booking::Model {
        booking::Model {
            id: self.id,
            property_id: self.property_id,
            user_id: self.user_id,
            check_in: self.check_in,
            check_out: self.check_out,
            status: self.status,
            created_at: Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}
