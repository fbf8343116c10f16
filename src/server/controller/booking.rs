use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingDto, CancelReservationDto, ReservationListDto, ReserveDto, ReservedDatesDto,
        },
    },
    server::{
        error::AppError,
        model::booking::{CancelBookingParams, ReserveParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Get every reserved day of a property.
///
/// Returns each calendar day covered by an active booking, both check-in and
/// check-out days included, for greying out the booking calendar.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `property_id` - Property to look up
///
/// # Returns
/// - `200 OK` - Reserved days in ascending order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reserved-dates/{property_id}",
    tag = BOOKING_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Reserved days of the property", body = ReservedDatesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reserved_dates(
    State(state): State<AppState>,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let dates = service.reserved_dates(property_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReservedDatesDto {
            reserved_dates: dates.into_iter().collect(),
        }),
    ))
}

/// Reserve a property for a date range.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Property, user and `YYYY-MM-DD` check-in/check-out dates
///
/// # Returns
/// - `201 Created` - Reservation stored as active
/// - `400 Bad Request` - Malformed date, past check-in, inverted range, or overlap
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reserve",
    tag = BOOKING_TAG,
    request_body = ReserveDto,
    responses(
        (status = 201, description = "Reservation created", body = BookingDto),
        (status = 400, description = "Invalid dates or the range is already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reserve(
    State(state): State<AppState>,
    Json(payload): Json<ReserveDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.reserve(ReserveParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Get a user's upcoming and ongoing reservations.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - User to list reservations for
///
/// # Returns
/// - `200 OK` - Active reservations ending today or later
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/active-reservations/{user_id}",
    tag = BOOKING_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Upcoming reservations", body = ReservationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_reservations(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let reservations = service.upcoming_for_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReservationListDto {
            reservations: reservations.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Get a user's reservations that have ended.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - User to list reservations for
///
/// # Returns
/// - `200 OK` - Reservations with check-out before today, any status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/past-reservations/{user_id}",
    tag = BOOKING_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Past reservations", body = ReservationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_past_reservations(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let reservations = service.past_for_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ReservationListDto {
            reservations: reservations.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Cancel a reservation before its check-in day.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Booking id and owning user id
///
/// # Returns
/// - `200 OK` - Reservation cancelled
/// - `400 Bad Request` - Reservation inactive or check-in day reached
/// - `404 Not Found` - No such reservation for the user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cancel-reservation",
    tag = BOOKING_TAG,
    request_body = CancelReservationDto,
    responses(
        (status = 200, description = "Reservation cancelled", body = BookingDto),
        (status = 400, description = "Reservation can no longer be cancelled", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CancelReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service
        .cancel(CancelBookingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Trigger an expiry sweep in the background.
///
/// Responds immediately; the sweep result is only logged.
///
/// # Returns
/// - `202 Accepted` - Sweep started
#[utoipa::path(
    get,
    path = "/api/update-reservations",
    tag = BOOKING_TAG,
    responses(
        (status = 202, description = "Sweep started", body = MessageDto)
    ),
)]
pub async fn update_reservations(State(state): State<AppState>) -> impl IntoResponse {
    let db = state.db.clone();

    tokio::spawn(async move {
        if let Err(e) = BookingService::new(&db).sweep_expired().await {
            tracing::error!("Triggered reservation sweep failed: {}", e);
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(MessageDto {
            message: "Reservation update started".to_string(),
        }),
    )
}
