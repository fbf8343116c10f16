use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::internal::InternalError};

/// Failures of the reservation lifecycle: reserve, cancel and sweep.
///
/// Every variant except `Storage` and `Corrupt` is a rule violation reported back to the caller.
/// None of them are fatal to the process and nothing is retried internally.
#[derive(Error, Debug)]
pub enum BookingError {
    /// A date was not in strict `YYYY-MM-DD` form.
    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// The requested check-in date is before today.
    #[error("Reservations cannot start in the past")]
    PastDate,

    /// The requested check-out date is before the check-in date.
    #[error("Check-out date must not be before check-in date")]
    InvalidRange,

    /// The requested stay covers more days than a single reservation allows.
    #[error("Reservations cannot cover more than {0} days")]
    StayTooLong(i64),

    /// An active booking on the same property shares at least one day.
    #[error("The property is already reserved for those dates")]
    Overlap,

    /// No booking matches the id and user.
    #[error("Reservation not found")]
    NotFound,

    /// The booking is already completed or cancelled.
    #[error("The reservation is no longer active")]
    AlreadyInactive,

    /// Cancellation requested on or after the check-in date.
    #[error("Reservations can only be cancelled before the check-in day")]
    TooLate,

    /// Any persistence failure, including a lost race on the reservation transaction.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),

    /// A stored booking row could not be converted to a domain booking.
    #[error(transparent)]
    Corrupt(#[from] InternalError),
}

/// Converts booking errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Date validation, overlap and lifecycle violations
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - `Storage` and `Corrupt`, logged with full details
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Corrupt(_) => {
                tracing::error!("Booking storage error: {}", self);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
