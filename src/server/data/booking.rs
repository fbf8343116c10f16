//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` for reading and transitioning booking
//! rows. The repository is generic over `ConnectionTrait` so the reservation flow can
//! run its overlap check and insert on the same open transaction.
//!
//! Methods that convert rows to domain bookings return `BookingError`, so a row that
//! fails conversion surfaces as `BookingError::Corrupt` instead of a generic database
//! error. Plain updates return `DbErr`.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::booking::BookingError,
    model::booking::{Booking, BookingStatus, BookingWithProperty, CreateBookingParams, StayRange},
};

/// Repository providing database operations for bookings.
///
/// Holds a reference to either a `DatabaseConnection` or a `DatabaseTransaction`.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new booking with `active` status.
    ///
    /// Performs no overlap check; callers are expected to run
    /// `find_overlapping_active` on the same transaction first.
    ///
    /// # Arguments
    /// - `params` - Property, user and validated stay range
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(BookingError::Storage)` - Database error, including foreign key violations
    ///   for unknown property or user ids
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, BookingError> {
        let entity = entity::booking::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            user_id: ActiveValue::Set(params.user_id),
            check_in: ActiveValue::Set(params.stay.check_in()),
            check_out: ActiveValue::Set(params.stay.check_out()),
            status: ActiveValue::Set(BookingStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        to_domain(entity)
    }

    /// Finds active bookings on a property whose stay shares a day with `stay`.
    ///
    /// Uses the closed-interval test `existing.check_in <= stay.check_out AND
    /// existing.check_out >= stay.check_in`, so touching endpoints match.
    ///
    /// # Arguments
    /// - `property_id` - Property to check
    /// - `stay` - Requested stay range
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Conflicting active bookings, empty when the range is free
    /// - `Err(BookingError::Storage)` - Database error during query
    /// - `Err(BookingError::Corrupt)` - A stored row has an unknown status or inverted range
    pub async fn find_overlapping_active(
        &self,
        property_id: i32,
        stay: &StayRange,
    ) -> Result<Vec<Booking>, BookingError> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::PropertyId.eq(property_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::CheckIn.lte(stay.check_out()))
            .filter(entity::booking::Column::CheckOut.gte(stay.check_in()))
            .all(self.db)
            .await?;

        entities.into_iter().map(to_domain).collect()
    }

    /// Gets the stay ranges of all active bookings on a property.
    ///
    /// # Arguments
    /// - `property_id` - Property to look up
    ///
    /// # Returns
    /// - `Ok(Vec<StayRange>)` - Active ranges ordered by check-in
    /// - `Err(BookingError::Storage)` - Database error during query
    /// - `Err(BookingError::Corrupt)` - A stored row has an unknown status or inverted range
    pub async fn get_active_ranges_by_property(
        &self,
        property_id: i32,
    ) -> Result<Vec<StayRange>, BookingError> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::PropertyId.eq(property_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| to_domain(entity).map(|booking| booking.stay))
            .collect()
    }

    /// Finds a booking by id, restricted to the owning user.
    ///
    /// # Arguments
    /// - `booking_id` - Booking id
    /// - `user_id` - Id of the user who must own the booking
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found and owned by the user
    /// - `Ok(None)` - No such booking, or it belongs to someone else
    /// - `Err(BookingError::Storage)` - Database error during query
    /// - `Err(BookingError::Corrupt)` - A stored row has an unknown status or inverted range
    pub async fn find_by_id_and_user(
        &self,
        booking_id: i32,
        user_id: i32,
    ) -> Result<Option<Booking>, BookingError> {
        let entity = entity::prelude::Booking::find_by_id(booking_id)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(to_domain).transpose()
    }

    /// Sets a booking to `cancelled` if, and only if, it is still active.
    ///
    /// The status condition is part of the UPDATE so a sweep that completes the
    /// booking in between is never overwritten.
    ///
    /// # Arguments
    /// - `booking_id` - Booking to cancel
    ///
    /// # Returns
    /// - `Ok(true)` - The booking was active and is now cancelled
    /// - `Ok(false)` - The booking was no longer active; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel_if_active(&self, booking_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Cancelled.as_str()),
            )
            .filter(entity::booking::Column::Id.eq(booking_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Marks every active booking whose check-out day is before `today` as completed.
    ///
    /// # Arguments
    /// - `today` - Current calendar date
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings transitioned
    /// - `Err(DbErr)` - Database error during update
    pub async fn complete_expired(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed.as_str()),
            )
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::CheckOut.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets a user's active bookings that have not ended yet.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `today` - Current calendar date
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithProperty>)` - Bookings with `check_out >= today`, soonest first
    /// - `Err(BookingError::Storage)` - Database error during query
    /// - `Err(BookingError::Corrupt)` - A stored row has an unknown status or inverted range
    pub async fn get_upcoming_by_user(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<BookingWithProperty>, BookingError> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::CheckOut.gte(today))
            .order_by_asc(entity::booking::Column::CheckIn)
            .find_also_related(entity::prelude::Property)
            .all(self.db)
            .await?;

        rows.into_iter().map(with_property).collect()
    }

    /// Gets a user's bookings that ended before today, whatever their status.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `today` - Current calendar date
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithProperty>)` - Bookings with `check_out < today`, most recent first
    /// - `Err(BookingError::Storage)` - Database error during query
    /// - `Err(BookingError::Corrupt)` - A stored row has an unknown status or inverted range
    pub async fn get_past_by_user(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<BookingWithProperty>, BookingError> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::CheckOut.lt(today))
            .order_by_desc(entity::booking::Column::CheckOut)
            .find_also_related(entity::prelude::Property)
            .all(self.db)
            .await?;

        rows.into_iter().map(with_property).collect()
    }
}

fn to_domain(entity: entity::booking::Model) -> Result<Booking, BookingError> {
    Ok(Booking::from_entity(entity)?)
}

fn with_property(
    (booking, property): (entity::booking::Model, Option<entity::property::Model>),
) -> Result<BookingWithProperty, BookingError> {
    let property = property.ok_or_else(|| {
        DbErr::RecordNotFound(format!("Property {} for booking {}", booking.property_id, booking.id))
    })?;

    Ok(BookingWithProperty {
        booking: to_domain(booking)?,
        property_name: property.name,
    })
}
