use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reservation request as submitted by the booking form.
///
/// Dates are kept as raw strings so the server can reject anything that is not
/// strictly `YYYY-MM-DD` with a descriptive error instead of a generic JSON
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReserveDto {
    pub property_id: i32,
    pub user_id: i32,
    #[serde(alias = "in_time")]
    pub check_in: String,
    #[serde(alias = "out_time")]
    pub check_out: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CancelReservationDto {
    pub booking_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusDto {
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub property_id: i32,
    pub user_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatusDto,
    pub created_at: DateTime<Utc>,
}

/// A booking listed on the user's reservations page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub property_id: i32,
    pub property_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationListDto {
    pub reservations: Vec<ReservationDto>,
}

/// Every day covered by an active booking, each as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservedDatesDto {
    pub reserved_dates: Vec<NaiveDate>,
}
