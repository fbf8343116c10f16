//! Booking domain models, stay ranges, and reservation parameters.
//!
//! A booking covers a closed range of calendar days: both the check-in and the
//! check-out day count as occupied. The repository narrows overlap candidates in
//! SQL with the same inequality as `StayRange::overlaps`, and the reservation flow
//! confirms each candidate through `overlaps` before rejecting a request.

use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::booking::{
        BookingDto, BookingStatusDto, CancelReservationDto, ReservationDto, ReserveDto,
    },
    server::error::{booking::BookingError, internal::InternalError},
};

/// Longest stay a single reservation may cover, counting both endpoint days.
pub const MAX_STAY_DAYS: i64 = 365;

/// Lifecycle state of a booking.
///
/// `Active` is the only state that blocks other reservations. `Completed` and
/// `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Returns the value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether no further transition is allowed from this state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }

    pub fn into_dto(self) -> BookingStatusDto {
        match self {
            Self::Active => BookingStatusDto::Active,
            Self::Completed => BookingStatusDto::Completed,
            Self::Cancelled => BookingStatusDto::Cancelled,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    /// Parses a stored status value.
    ///
    /// # Returns
    /// - `Ok(BookingStatus)` - One of `active`, `completed`, `cancelled`
    /// - `Err(String)` - The unrecognised value
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(other.to_string()),
        }
    }
}

/// Closed range of calendar days from check-in to check-out.
///
/// Can only be built through `StayRange::new`, so `check_out >= check_in`
/// always holds. A single-day stay has equal endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Creates a stay range.
    ///
    /// # Arguments
    /// - `check_in` - First occupied day
    /// - `check_out` - Last occupied day
    ///
    /// # Returns
    /// - `Ok(StayRange)` - Valid range
    /// - `Err(BookingError::InvalidRange)` - `check_out` is before `check_in`
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out < check_in {
            return Err(BookingError::InvalidRange);
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of occupied days, both endpoints included.
    pub fn len_days(&self) -> i64 {
        (self.check_out - self.check_in).num_days() + 1
    }

    /// Closed-interval intersection test.
    ///
    /// Ranges that only share an endpoint day overlap: a guest checking out on
    /// the 12th blocks a new stay starting on the 12th.
    ///
    /// # Arguments
    /// - `other` - Range to compare against
    ///
    /// # Returns
    /// - `true` - At least one calendar day is in both ranges
    /// - `false` - The ranges are disjoint
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in <= other.check_out && self.check_out >= other.check_in
    }

    /// Iterates every calendar day in the range, both endpoints included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.check_out;
        self.check_in.iter_days().take_while(move |day| *day <= last)
    }
}

/// Expands stay ranges into the ordered set of every occupied day.
///
/// Days shared by several ranges appear once.
///
/// # Arguments
/// - `ranges` - Ranges to expand, typically the active bookings of one property
///
/// # Returns
/// - `BTreeSet<NaiveDate>` - Occupied days in ascending order
pub fn expand_reserved_dates<'a, I>(ranges: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a StayRange>,
{
    ranges.into_iter().flat_map(StayRange::days).collect()
}

/// A reservation of one property by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub property_id: i32,
    pub user_id: i32,
    pub stay: StayRange,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(InternalError::UnknownBookingStatus)` - Stored status is not recognised
    /// - `Err(InternalError::InvertedBookingRange)` - Stored check-out precedes check-in
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        let status = entity
            .status
            .parse::<BookingStatus>()
            .map_err(|value| InternalError::UnknownBookingStatus {
                booking_id: entity.id,
                value,
            })?;

        let stay = StayRange::new(entity.check_in, entity.check_out).map_err(|_| {
            InternalError::InvertedBookingRange {
                booking_id: entity.id,
            }
        })?;

        Ok(Self {
            id: entity.id,
            property_id: entity.property_id,
            user_id: entity.user_id,
            stay,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            property_id: self.property_id,
            user_id: self.user_id,
            check_in: self.stay.check_in(),
            check_out: self.stay.check_out(),
            status: self.status.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// Booking paired with the name of the booked property for reservation listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithProperty {
    pub booking: Booking,
    pub property_name: String,
}

impl BookingWithProperty {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.booking.id,
            property_id: self.booking.property_id,
            property_name: self.property_name,
            check_in: self.booking.stay.check_in(),
            check_out: self.booking.stay.check_out(),
            status: self.booking.status.into_dto(),
        }
    }
}

/// Raw reservation request before date validation.
#[derive(Debug, Clone)]
pub struct ReserveParams {
    pub property_id: i32,
    pub user_id: i32,
    /// Check-in date as submitted, expected in `YYYY-MM-DD` form.
    pub check_in: String,
    /// Check-out date as submitted, expected in `YYYY-MM-DD` form.
    pub check_out: String,
}

impl ReserveParams {
    pub fn from_dto(dto: ReserveDto) -> Self {
        Self {
            property_id: dto.property_id,
            user_id: dto.user_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
        }
    }
}

/// Validated booking ready to be inserted with `Active` status.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub property_id: i32,
    pub user_id: i32,
    pub stay: StayRange,
}

/// Identifies the booking a user wants to cancel.
#[derive(Debug, Clone)]
pub struct CancelBookingParams {
    pub booking_id: i32,
    pub user_id: i32,
}

impl CancelBookingParams {
    pub fn from_dto(dto: CancelReservationDto) -> Self {
        Self {
            booking_id: dto.booking_id,
            user_id: dto.user_id,
        }
    }
}
