//! Password hashing and verification for protected short links.

use crate::error::AppError;
use scrypt::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use scrypt::Scrypt;

/// Hashes a password into a PHC-format scrypt string.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Scrypt
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::internal("Failed to hash password", e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash.
///
/// An unparseable hash verifies as false rather than erroring; the record is
/// simply treated as locked.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Scrypt.verify_password(plain.as_bytes(), &parsed).is_ok()
}
