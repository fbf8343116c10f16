//! Booking service for reservation rules and status transitions.
//!
//! This module provides the `BookingService`, which owns every rule about when a
//! property can be reserved or a reservation cancelled. Dates are compared as
//! calendar days against a "today" captured when the service is constructed.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::booking::BookingRepository,
    error::booking::BookingError,
    model::booking::{
        expand_reserved_dates, Booking, BookingStatus, BookingWithProperty, CancelBookingParams,
        CreateBookingParams, ReserveParams, StayRange, MAX_STAY_DAYS,
    },
    util::date::parse_date,
};

/// Service providing business logic for reservations.
///
/// This struct holds a reference to the database connection and the current
/// calendar date used by every past/future decision it makes.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance using today's UTC date.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            today: Utc::now().date_naive(),
        }
    }

    /// Replaces the date the service treats as today.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Validates a reservation request and stores it as an active booking.
    ///
    /// Validation order is date format, past check-in, inverted range, stay length,
    /// then overlap.
    /// The overlap check and the insert share one transaction, so two requests
    /// racing for the same days cannot both be stored: the loser fails with a
    /// storage error.
    ///
    /// # Arguments
    /// - `params` - Property, user and the raw check-in/check-out strings
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created active booking
    /// - `Err(BookingError::InvalidDateFormat)` - A date is not strict `YYYY-MM-DD`
    /// - `Err(BookingError::PastDate)` - Check-in is before today
    /// - `Err(BookingError::InvalidRange)` - Check-out is before check-in
    /// - `Err(BookingError::StayTooLong)` - Stay covers more than `MAX_STAY_DAYS` days
    /// - `Err(BookingError::Overlap)` - An active booking shares at least one day
    /// - `Err(BookingError::Storage)` - Database error or lost race
    pub async fn reserve(&self, params: ReserveParams) -> Result<Booking, BookingError> {
        let check_in = parse_date(&params.check_in)?;
        let check_out = parse_date(&params.check_out)?;

        if check_in < self.today {
            return Err(BookingError::PastDate);
        }

        let stay = StayRange::new(check_in, check_out)?;
        if stay.len_days() > MAX_STAY_DAYS {
            return Err(BookingError::StayTooLong(MAX_STAY_DAYS));
        }

        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let conflicts = repo
            .find_overlapping_active(params.property_id, &stay)
            .await?
            .into_iter()
            .filter(|booking| booking.stay.overlaps(&stay))
            .count();
        if conflicts > 0 {
            txn.rollback().await?;

            tracing::debug!(
                "Reservation of property {} for {} to {} overlaps {} active booking(s)",
                params.property_id,
                stay.check_in(),
                stay.check_out(),
                conflicts
            );
            return Err(BookingError::Overlap);
        }

        let booking = repo
            .create(CreateBookingParams {
                property_id: params.property_id,
                user_id: params.user_id,
                stay,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} reserved property {} from {} to {} (booking {})",
            booking.user_id,
            booking.property_id,
            booking.stay.check_in(),
            booking.stay.check_out(),
            booking.id
        );

        Ok(booking)
    }

    /// Cancels a user's active booking before its check-in day.
    ///
    /// # Arguments
    /// - `params` - Booking id and the id of the user requesting cancellation
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking with status `Cancelled`
    /// - `Err(BookingError::NotFound)` - No booking with that id belongs to the user
    /// - `Err(BookingError::AlreadyInactive)` - Booking is completed or cancelled,
    ///   including when a sweep completed it between the read and the update
    /// - `Err(BookingError::TooLate)` - Today is on or after the check-in day
    /// - `Err(BookingError::Storage)` - Database error
    pub async fn cancel(&self, params: CancelBookingParams) -> Result<Booking, BookingError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .find_by_id_and_user(params.booking_id, params.user_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        if booking.status.is_terminal() {
            return Err(BookingError::AlreadyInactive);
        }

        if self.today >= booking.stay.check_in() {
            return Err(BookingError::TooLate);
        }

        if !repo.cancel_if_active(booking.id).await? {
            return Err(BookingError::AlreadyInactive);
        }

        tracing::info!(
            "User {} cancelled booking {}",
            params.user_id,
            params.booking_id
        );

        Ok(Booking {
            status: BookingStatus::Cancelled,
            ..booking
        })
    }

    /// Completes every active booking whose check-out day is before today.
    ///
    /// Safe to run repeatedly and concurrently with other operations; a second
    /// run on the same day transitions nothing.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings moved to `Completed`
    /// - `Err(BookingError::Storage)` - Database error
    pub async fn sweep_expired(&self) -> Result<u64, BookingError> {
        let repo = BookingRepository::new(self.db);

        let completed = repo.complete_expired(self.today).await?;

        if completed > 0 {
            tracing::info!("Marked {} expired booking(s) as completed", completed);
        } else {
            tracing::debug!("No expired bookings to complete");
        }

        Ok(completed)
    }

    /// Gets every day of a property that is covered by an active booking.
    ///
    /// # Arguments
    /// - `property_id` - Property to look up
    ///
    /// # Returns
    /// - `Ok(BTreeSet<NaiveDate>)` - Reserved days in ascending order
    /// - `Err(BookingError::Storage)` - Database error
    pub async fn reserved_dates(
        &self,
        property_id: i32,
    ) -> Result<BTreeSet<NaiveDate>, BookingError> {
        let repo = BookingRepository::new(self.db);

        let ranges = repo.get_active_ranges_by_property(property_id).await?;

        Ok(expand_reserved_dates(&ranges))
    }

    /// Gets a user's active bookings that end today or later.
    ///
    /// # Arguments
    /// - `user_id` - User to list reservations for
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithProperty>)` - Upcoming and ongoing reservations, soonest first
    /// - `Err(BookingError::Storage)` - Database error
    pub async fn upcoming_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<BookingWithProperty>, BookingError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_upcoming_by_user(user_id, self.today).await?)
    }

    /// Gets a user's bookings that ended before today, whatever their status.
    ///
    /// # Arguments
    /// - `user_id` - User to list reservations for
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithProperty>)` - Past reservations, most recent first
    /// - `Err(BookingError::Storage)` - Database error
    pub async fn past_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<BookingWithProperty>, BookingError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_past_by_user(user_id, self.today).await?)
    }
}
