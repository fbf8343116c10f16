use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No user id is stored in the session.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session refers to a user id that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email and password did not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Google client id or secret is missing from the configuration.
    #[error("Google OAuth is not configured")]
    OAuthNotConfigured,

    /// Exchanging the authorization code with Google failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Google userinfo did not include an email address.
    #[error("Google account did not provide an email address")]
    MissingEmail,

    /// Hashing or parsing a stored password hash failed.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; details are logged at debug level.
///
/// # Returns
/// - 400 Bad Request - CSRF failures, bad credentials, failed code exchange, missing email
/// - 401 Unauthorized - No user in session or session user no longer exists
/// - 500 Internal Server Error - OAuth not configured, password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "Google authorization failed".to_string(),
            ),
            Self::MissingEmail => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::OAuthNotConfigured => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
