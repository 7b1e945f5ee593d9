//! Field rules shared by the request DTOs.

use validator::ValidationError;

/// Rejects strings made only of whitespace. Empty strings are left to the
/// `length` rule on the same field.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
