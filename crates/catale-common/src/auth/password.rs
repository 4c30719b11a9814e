//! Password hashing (Argon2id) and strength rules

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a password with a random salt
///
/// # Errors
/// Returns an internal error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// Check a password against a stored PHC hash
///
/// # Errors
/// Returns an internal error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("malformed password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Require a minimum length plus at least one letter and one digit
///
/// # Errors
/// Returns `AppError::Validation` describing the first rule that fails
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::validation("password must contain a letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("password must contain a digit"));
    }
    Ok(())
}
