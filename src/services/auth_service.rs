// src/services/auth_service.rs

//! Password hashing and verification.

use crate::errors::AppError;
use tracing::{debug, error, instrument};

/// bcrypt work factor. Keep in sync with what the seed fixtures were hashed with.
pub const HASH_COST: u32 = 10;

/// Hashes a plain-text password with bcrypt at [`HASH_COST`].
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  bcrypt::hash(password, HASH_COST).map_err(|bcrypt_err| {
    error!(error = %bcrypt_err, "bcrypt password hashing failed.");
    AppError::Internal(format!("Password hashing process failed: {}", bcrypt_err))
  })
}

/// Verifies a plain-text password against a stored bcrypt hash.
///
/// Returns `Ok(false)` for a mismatch; an `Err` means the stored hash string
/// itself is malformed or verification failed internally.
#[instrument(name = "auth_service::verify_password", skip_all)]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, AppError> {
  if stored_hash.is_empty() {
    return Err(AppError::Internal("Stored password hash is empty.".to_string()));
  }

  match bcrypt::verify(provided_password, stored_hash) {
    Ok(matches) => {
      debug!(matches, "Password verification finished.");
      Ok(matches)
    }
    Err(bcrypt_err) => {
      error!(error = %bcrypt_err, "bcrypt password verification failed.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        bcrypt_err
      )))
    }
  }
}
