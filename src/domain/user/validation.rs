//! User validation utilities
//!
//! Lengths are counted in Unicode scalar values (`chars().count()`), so
//! "Zoë" is three characters long regardless of its UTF-8 byte length.

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("first_name must be between {min} and {max} characters")]
    InvalidFirstName { min: usize, max: usize },

    #[error("last_name must be between {min} and {max} characters")]
    InvalidLastName { min: usize, max: usize },

    #[error("biography must be between {min} and {max} characters")]
    InvalidBiography { min: usize, max: usize },
}

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 20;
pub const MIN_BIOGRAPHY_LENGTH: usize = 20;
pub const MAX_BIOGRAPHY_LENGTH: usize = 450;

fn char_len_within(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// Validate a first name (2 to 20 characters)
pub fn validate_first_name(first_name: &str) -> Result<(), UserValidationError> {
    if !char_len_within(first_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(UserValidationError::InvalidFirstName {
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validate a last name (2 to 20 characters)
pub fn validate_last_name(last_name: &str) -> Result<(), UserValidationError> {
    if !char_len_within(last_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(UserValidationError::InvalidLastName {
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validate a biography (20 to 450 characters)
pub fn validate_biography(biography: &str) -> Result<(), UserValidationError> {
    if !char_len_within(biography, MIN_BIOGRAPHY_LENGTH, MAX_BIOGRAPHY_LENGTH) {
        return Err(UserValidationError::InvalidBiography {
            min: MIN_BIOGRAPHY_LENGTH,
            max: MAX_BIOGRAPHY_LENGTH,
        });
    }

    Ok(())
}

/// Validate all user fields, reporting the first failure in field order:
/// first_name, last_name, biography.
pub fn validate_user_fields(
    first_name: &str,
    last_name: &str,
    biography: &str,
) -> Result<(), UserValidationError> {
    validate_first_name(first_name)?;
    validate_last_name(last_name)?;
    validate_biography(biography)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIO: &str = "A short biography text of sufficient length to pass.";

    // First name tests
    #[test]
    fn test_first_name_bounds() {
        assert!(validate_first_name("Al").is_ok());
        assert!(validate_first_name(&"a".repeat(20)).is_ok());
        assert!(validate_first_name("A").is_err());
        assert!(validate_first_name(&"a".repeat(21)).is_err());
        assert!(validate_first_name("").is_err());
    }

    #[test]
    fn test_first_name_error() {
        assert_eq!(
            validate_first_name("A"),
            Err(UserValidationError::InvalidFirstName { min: 2, max: 20 })
        );
    }

    // Last name tests
    #[test]
    fn test_last_name_bounds() {
        assert!(validate_last_name("Li").is_ok());
        assert!(validate_last_name(&"b".repeat(20)).is_ok());
        assert_eq!(
            validate_last_name("L"),
            Err(UserValidationError::InvalidLastName { min: 2, max: 20 })
        );
        assert!(validate_last_name(&"b".repeat(21)).is_err());
    }

    // Biography tests
    #[test]
    fn test_biography_bounds() {
        assert!(validate_biography(&"x".repeat(20)).is_ok());
        assert!(validate_biography(&"x".repeat(450)).is_ok());
        assert_eq!(
            validate_biography(&"x".repeat(19)),
            Err(UserValidationError::InvalidBiography { min: 20, max: 450 })
        );
        assert!(validate_biography(&"x".repeat(451)).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 two-byte characters: 40 bytes, still within the name limit
        let accented = "é".repeat(20);
        assert_eq!(accented.len(), 40);
        assert!(validate_first_name(&accented).is_ok());

        // "Zoë" is 3 characters and 4 bytes
        assert!(validate_last_name("Zoë").is_ok());

        // A single multi-byte character is still too short
        assert!(validate_first_name("é").is_err());
    }

    #[test]
    fn test_reports_first_failing_field_in_order() {
        assert_eq!(
            validate_user_fields("A", "S", "short"),
            Err(UserValidationError::InvalidFirstName { min: 2, max: 20 })
        );
        assert_eq!(
            validate_user_fields("Ana", "S", "short"),
            Err(UserValidationError::InvalidLastName { min: 2, max: 20 })
        );
        assert_eq!(
            validate_user_fields("Ana", "Silva", "short"),
            Err(UserValidationError::InvalidBiography { min: 20, max: 450 })
        );
        assert!(validate_user_fields("Ana", "Silva", BIO).is_ok());
    }

    #[test]
    fn test_first_name_too_short_scenario() {
        let biography = "x".repeat(30);
        assert_eq!(
            validate_user_fields("A", "Silva", &biography),
            Err(UserValidationError::InvalidFirstName { min: 2, max: 20 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UserValidationError::InvalidFirstName { min: 2, max: 20 }.to_string(),
            "first_name must be between 2 and 20 characters"
        );
        assert_eq!(
            UserValidationError::InvalidBiography { min: 20, max: 450 }.to_string(),
            "biography must be between 20 and 450 characters"
        );
    }
}
