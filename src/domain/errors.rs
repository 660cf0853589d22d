//! Domain validation errors.

use std::fmt;

/// Errors raised while validating a candidate submission.
///
/// The display text of each variant is the fixed, user-facing message
/// callers surface verbatim; the payloads are diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or blank.
    MissingRequiredField { field: String },

    /// The email address does not match `local@domain.tld`.
    InvalidEmail,

    /// The phone number does not match the mobile pattern.
    InvalidPhone,

    /// A nested education or work-experience entry has a bad date or field.
    InvalidDate { field: String },
}

impl ValidationError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    pub(crate) fn invalid_date(field: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
        }
    }

    /// The offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { field } | Self::InvalidDate { field } => Some(field),
            Self::InvalidEmail => Some("email"),
            Self::InvalidPhone => Some("phone"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField { field } => write!(f, "Missing required field: {}", field),
            Self::InvalidEmail => write!(f, "Invalid email"),
            Self::InvalidPhone => write!(f, "Invalid phone"),
            Self::InvalidDate { .. } => write!(f, "Invalid date"),
        }
    }
}

impl std::error::Error for ValidationError {}
