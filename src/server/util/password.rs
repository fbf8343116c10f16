//! Password hashing and verification using Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::auth::AuthError;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(String)` - PHC-format hash suitable for storage
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// # Arguments
/// - `password` - Plaintext password from the login request
/// - `hash` - Stored hash
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::PasswordHash)` - Stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AuthError::PasswordHash(format!("invalid hash format: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash(e.to_string())),
    }
}
