//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern:
//! - `AuthSession` - User authentication state (user ID)
//! - `CsrfSession` - CSRF token management for the Google OAuth flow

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's id and session
/// lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful password or Google login. The session id is cycled
    /// first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - The user's id
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all data from the session and deletes it from the store.
    ///
    /// # Returns
    /// - `Ok(())` - Session flushed
    /// - `Err(AppError::SessionErr(_))` - Failed to delete the stored session
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the Google login starts and consumed by the callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new CsrfSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
