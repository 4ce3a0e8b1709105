//! Presence checks run before a submission.

use super::values::{Field, FormValues};
use std::fmt;

/// A required field that has never been provided.
///
/// `Display` yields the diagnostic shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingEmail,
    MissingPhone,
}

impl ValidationError {
    /// The field that failed the check.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingName => Field::Name,
            Self::MissingEmail => Field::Email,
            Self::MissingPhone => Field::Phone,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Please provide your Name"),
            Self::MissingEmail => write!(f, "Please provide your Email"),
            Self::MissingPhone => write!(f, "Please provide your Phone Number"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check required fields in order; the first missing one wins.
///
/// `message` is never required and no format checks are applied.
pub fn validate(values: &FormValues) -> Result<(), ValidationError> {
    if values.name.is_none() {
        return Err(ValidationError::MissingName);
    }
    if values.email.is_none() {
        return Err(ValidationError::MissingEmail);
    }
    if values.phone.is_none() {
        return Err(ValidationError::MissingPhone);
    }
    Ok(())
}
