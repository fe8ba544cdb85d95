//! Argon2 password hashes for statically configured users.
//!
//! Hashes are stored as PHC strings in `password_hash`, so the algorithm and
//! its parameters travel with each hash.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Produces the PHC string to put in a user's `password_hash`, using Argon2id
/// with default parameters and a fresh salt.
///
/// ## Errors
/// Returns `InvalidConfiguration` if Argon2 rejects the input.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::InvalidConfiguration(format!("cannot hash password: {e}")))
}

fn parse_hash(password_hash: &str) -> ServiceResult<PasswordHash<'_>> {
    PasswordHash::new(password_hash)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("malformed password hash: {e}")))
}

/// ## Summary
/// Checks that a configured `password_hash` is a well-formed PHC string.
///
/// ## Errors
/// Returns `InvalidConfiguration` if the hash cannot be parsed.
pub fn validate_hash(password_hash: &str) -> ServiceResult<()> {
    parse_hash(password_hash).map(|_| ())
}

/// ## Summary
/// Checks a login attempt against a stored hash.
///
/// ## Errors
/// Returns `NotAuthenticated` if the password does not match, and
/// `InvalidConfiguration` if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<()> {
    let parsed = parse_hash(password_hash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|err| {
            tracing::trace!(error = %err, "Password rejected");
            ServiceError::NotAuthenticated
        })
}
