//! Centralized validation and helper functions.

/// Maximum length of a database name, which becomes a directory component
pub const MAX_NAME_LENGTH: usize = 255;

/// Check that a database name or record id is a non-empty run of ASCII
/// letters, digits and `_`.
///
/// # Examples
///
/// ```
/// use seqret::utils::validation::is_valid_name;
///
/// assert!(is_valid_name("embl_2024"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("../etc"));
/// ```
#[must_use]
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Name validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty name provided")]
    EmptyName,
    #[error("Name too long: exceeds {MAX_NAME_LENGTH} characters")]
    NameTooLong,
    #[error("Invalid name '{0}': only letters, digits and '_' are allowed")]
    InvalidCharacters(String),
}

/// Validate a database name before it is used as a directory component.
///
/// Names that could escape the catalog root (`..`, separators, null bytes)
/// are rejected along with anything else outside the address alphabet.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` if the name is empty,
/// `ValidationError::NameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidCharacters` if it contains anything other than
/// ASCII letters, digits and `_`.
pub fn validate_database_name(name: &str) -> Result<&str, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    if !is_valid_name(name) {
        return Err(ValidationError::InvalidCharacters(name.to_string()));
    }
    Ok(name)
}
