use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingDto, BookingStatusDto, CancelReservationDto, ReservationDto,
            ReservationListDto, ReserveDto, ReservedDatesDto,
        },
        feedback::{CreateFeedbackDto, FeedbackDto, FeedbackListDto},
        property::{PropertyDto, PropertyListDto},
        user::{AuthResponseDto, LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            booking::{self, BOOKING_TAG},
            feedback::{self, FEEDBACK_TAG},
            property::{self, PROPERTY_TAG},
            user::{self, USER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Staybook API", description = "Property listings, reservations and feedback"),
    paths(
        user::register,
        user::login,
        user::logout,
        user::get_user,
        auth::google_login,
        auth::google_callback,
        auth::google_success,
        property::get_properties,
        property::get_property,
        booking::get_reserved_dates,
        booking::reserve,
        booking::get_active_reservations,
        booking::get_past_reservations,
        booking::cancel_reservation,
        booking::update_reservations,
        feedback::create_feedback,
        feedback::get_feedback,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        RegisterUserDto,
        LoginDto,
        AuthResponseDto,
        PropertyDto,
        PropertyListDto,
        ReserveDto,
        CancelReservationDto,
        BookingDto,
        BookingStatusDto,
        ReservationDto,
        ReservationListDto,
        ReservedDatesDto,
        CreateFeedbackDto,
        FeedbackDto,
        FeedbackListDto,
    )),
    tags(
        (name = USER_TAG, description = "Registration and password login"),
        (name = AUTH_TAG, description = "Google sign-in"),
        (name = PROPERTY_TAG, description = "Property listings"),
        (name = BOOKING_TAG, description = "Reservations"),
        (name = FEEDBACK_TAG, description = "Property feedback"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(user::register))
        .route("/api/login", post(user::login))
        .route("/api/auth/logout", get(user::logout))
        .route("/api/auth/user", get(user::get_user))
        .route("/auth/google/login", get(auth::google_login))
        .route("/auth/google/callback", get(auth::google_callback))
        .route("/auth/google/success", get(auth::google_success))
        .route("/api/properties", get(property::get_properties))
        .route("/api/properties/{id}", get(property::get_property))
        .route(
            "/api/reserved-dates/{property_id}",
            get(booking::get_reserved_dates),
        )
        .route("/api/reserve", post(booking::reserve))
        .route(
            "/api/active-reservations/{user_id}",
            get(booking::get_active_reservations),
        )
        .route(
            "/api/past-reservations/{user_id}",
            get(booking::get_past_reservations),
        )
        .route("/api/cancel-reservation", post(booking::cancel_reservation))
        .route("/api/update-reservations", get(booking::update_reservations))
        .route("/api/feedback", post(feedback::create_feedback))
        .route("/api/feedback/{property_id}", get(feedback::get_feedback))
}

/// Swagger UI at `/api/docs` serving the generated OpenAPI document.
pub fn docs() -> SwaggerUi {
    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi())
}
