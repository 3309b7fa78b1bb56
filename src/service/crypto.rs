//! # Password Hashing
//!
//! Passwords are only ever stored as Argon2id hashes.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use super::errors::{ServiceError, ServiceResult};

/// Password requirements
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

/// Validate password against policy
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> ServiceResult<()> {
    if password.chars().count() < policy.min_length {
        return Err(ServiceError::WeakPassword(format!(
            "Password must be at least {} characters",
            policy.min_length
        )));
    }
    Ok(())
}

/// Hash a password with a fresh salt.
///
/// Returns the PHC hash string and the salt it was derived with.
pub fn hash_password(password: &str) -> ServiceResult<(String, String)> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ServiceError::HashingFailed)?;

    Ok((hash, salt.as_str().to_string()))
}

/// Verify a password against a stored PHC hash string.
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
