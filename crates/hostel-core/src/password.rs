use anyhow::anyhow;
use bcrypt::{BcryptError, non_truncating_hash, non_truncating_verify};

use crate::errors::AppError;

/// Longest password bcrypt hashes without truncation, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes `password`; anything over [`MAX_PASSWORD_BYTES`] is a validation error.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    non_truncating_hash(password, cost).map_err(|e| match e {
        BcryptError::Truncation(_) => AppError::bad_request(anyhow!(
            "password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )),
        other => AppError::internal(anyhow!("Failed to hash password: {}", other)),
    })
}

/// A password too long to have been hashed never matches.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    match non_truncating_verify(password, hash) {
        Ok(matches) => Ok(matches),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(AppError::internal(anyhow!("Failed to verify password: {}", e))),
    }
}
