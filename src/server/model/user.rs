//! User domain models and parameters.
//!
//! Users sign in either with email and password or through Google. Accounts
//! created through Google carry an empty password hash and cannot use password
//! login until one is set.

use chrono::{DateTime, Utc};

use crate::model::user::{LoginDto, RegisterUserDto, UserDto};

/// Registered application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, empty for accounts created through Google.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is never exposed.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Whether the account can sign in with a password.
    pub fn has_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    /// Already-hashed password, or empty for OAuth-only accounts.
    pub password_hash: String,
}

/// Registration request with the plaintext password still to be hashed.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParams {
    /// Builds registration parameters, normalising the email to trimmed lowercase.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

/// Profile returned by Google's userinfo endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GoogleUserInfo {
    pub email: Option<String>,
    pub name: Option<String>,
    pub given_name: Option<String>,
}

impl GoogleUserInfo {
    /// Display name for a new account: full name, then given name, then a placeholder.
    pub fn display_name(&self) -> String {
        [self.name.as_deref(), self.given_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or("Google User")
            .to_string()
    }
}
