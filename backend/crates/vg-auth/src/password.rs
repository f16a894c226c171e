//! Argon2id password hashing.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::LazyLock;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// Digest of a password no citizen holds, computed on first use
static DECOY_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("decoy password for unknown identities").ok());

/// Hash a password with a fresh random salt, returning a PHC string
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Check a password against a PHC string.
///
/// A malformed digest is treated as a mismatch.
pub fn verify_password(password: &str, digest: &str) -> bool {
    match PasswordHash::new(digest) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Run one full verification that always fails.
///
/// Login calls this when no citizen matches, so an unknown identity costs
/// the same Argon2 work as a wrong password.
pub fn verify_decoy(password: &str) -> bool {
    if let Some(digest) = DECOY_DIGEST.as_deref() {
        let _ = verify_password(password, digest);
    }
    false
}
