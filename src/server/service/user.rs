//! User service for business logic.
//!
//! This module provides the `UserService` for account registration, password login,
//! and resolving Google sign-ins to local accounts. It works with domain models
//! rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, GoogleUserInfo, LoginParams, RegisterUserParams, User},
    util::password::{hash_password, verify_password},
};

/// Service providing business logic for user accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for registration, authentication, and lookups.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with a hashed password.
    ///
    /// # Arguments
    /// - `params` - Name, normalised email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Missing field or email already registered
    /// - `Err(AppError::AuthErr(PasswordHash))` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        if params.name.is_empty() || params.email.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Name, email and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Authenticates an email and password pair.
    ///
    /// Unknown emails, accounts without a password, and wrong passwords all
    /// produce the same error.
    ///
    /// # Arguments
    /// - `params` - Normalised email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credentials do not match an account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.has_password() || !verify_password(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Resolves a Google profile to a local account, creating one on first sign-in.
    ///
    /// New accounts get an empty password hash.
    ///
    /// # Arguments
    /// - `info` - Profile from Google's userinfo endpoint
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created user
    /// - `Err(AppError::AuthErr(MissingEmail))` - Profile has no email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find_or_create_google_user(
        &self,
        info: GoogleUserInfo,
    ) -> Result<User, AppError> {
        let email = info
            .email
            .as_deref()
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .ok_or(AuthError::MissingEmail)?;

        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.find_by_email(&email).await? {
            return Ok(user);
        }

        let user = repo
            .create(CreateUserParams {
                name: info.display_name(),
                email,
                password_hash: String::new(),
            })
            .await?;

        tracing::info!("Created user {} from Google sign-in", user.id);

        Ok(user)
    }
}
