//! Common validation utilities.

use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validates that a required string field is not empty or whitespace only,
/// and holds no NUL characters (PostgreSQL text cannot store them).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Field is required"));
    }
    if value.contains('\0') {
        return Err(error(
            "invalid_character",
            "Field must not contain NUL characters",
        ));
    }
    Ok(())
}

/// Validates a social security number.
///
/// On top of [`validate_not_blank`], leading and trailing whitespace is
/// rejected: the column is `CHAR(13)`, which would silently drop trailing
/// blanks and make the stored value differ from the submitted one.
pub fn validate_social_security_number(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if value.trim() != value {
        return Err(error(
            "whitespace",
            "Social security number must not start or end with whitespace",
        ));
    }
    Ok(())
}
