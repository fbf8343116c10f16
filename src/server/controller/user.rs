use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{AuthResponseDto, LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParams, RegisterUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account with email and password.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name, email and password
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Missing field or user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: "User registered successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Log in with email and password.
///
/// Stores the user id in the session on success.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `400 Bad Request` - Invalid email or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.login(LoginParams::from_dto(payload)).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Login successful".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Log out the current session.
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - The session's user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
