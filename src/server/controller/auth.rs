use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::{auth::GoogleAuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping Google sign-in endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

#[derive(Deserialize)]
pub struct SuccessParams {
    pub user_id: i32,
}

/// Start Google sign-in.
///
/// Stores a CSRF token in the session and redirects to Google's consent screen.
///
/// # Returns
/// - `307 Temporary Redirect` - To Google
/// - `500 Internal Server Error` - Google OAuth not configured or session error
#[utoipa::path(
    get,
    path = "/auth/google/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google"),
        (status = 500, description = "Google OAuth is not configured", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let oauth_client = state
        .oauth_client
        .as_ref()
        .ok_or(AuthError::OAuthNotConfigured)?;
    let auth_service = GoogleAuthService::new(&state.http_client, oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete Google sign-in.
///
/// Validates the CSRF token, resolves the Google account to a local user,
/// logs the user in and redirects back to the frontend.
///
/// # Returns
/// - `303 See Other` - To the frontend with `google_login_success=true&user_id=`
/// - `400 Bad Request` - CSRF mismatch, rejected code, or no email on the account
/// - `500 Internal Server Error` - Google OAuth not configured or upstream failure
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 303, description = "Redirect to the frontend"),
        (status = 400, description = "Sign-in failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let oauth_client = state
        .oauth_client
        .as_ref()
        .ok_or(AuthError::OAuthNotConfigured)?;
    let auth_service = GoogleAuthService::new(&state.http_client, oauth_client);
    let user_service = UserService::new(&state.db);

    validate_csrf(&session, &params.state).await?;

    let info = auth_service.callback(params.code).await?;
    let user = user_service.find_or_create_google_user(info).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let redirect_url = format!(
        "{}/index.html?google_login_success=true&user_id={}",
        state.frontend_base_url.trim_end_matches('/'),
        user.id
    );

    Ok(Redirect::to(&redirect_url))
}

/// Confirm a completed Google sign-in.
///
/// # Returns
/// - `200 OK` - Confirmation message naming the user id
#[utoipa::path(
    get,
    path = "/auth/google/success",
    tag = AUTH_TAG,
    params(
        ("user_id" = i32, Query, description = "Signed-in user ID")
    ),
    responses(
        (status = 200, description = "Sign-in confirmed", body = MessageDto)
    ),
)]
pub async fn google_success(Query(params): Query<SuccessParams>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Google login successful for user {}", params.user_id),
        }),
    )
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
