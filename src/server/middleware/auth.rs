use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the logged-in user for handlers that require authentication.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the session's user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user no longer exists
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
