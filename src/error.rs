//! Error types for candidate intake.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

use crate::domain::{CandidateId, ValidationError};

/// Error code the persistence layer reports for a unique-constraint violation.
pub const UNIQUE_CONSTRAINT_CODE: &str = "P2002";

/// Error code the persistence layer reports for a broken foreign-key reference.
pub const FOREIGN_KEY_CODE: &str = "P2003";

/// Fixed message for a duplicate email submission.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "The email already exists in the database";

/// Errors reported by a persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A unique constraint rejected the write
    #[error("{message}")]
    UniqueConstraint {
        code: String,
        fields: Vec<String>,
        message: String,
    },

    /// A child record referenced a missing parent
    #[error("Foreign key constraint failed: {message}")]
    ForeignKey { message: String },

    /// Storage could not be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Any other storage failure, with the engine's code when it has one
    #[error("Storage error: {message}")]
    Other {
        code: Option<String>,
        message: String,
    },
}

impl RepositoryError {
    /// A `P2002` unique-constraint violation over `fields`.
    pub fn unique_violation(fields: &[&str]) -> Self {
        let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        let message = format!(
            "Unique constraint failed on the fields: ({})",
            fields
                .iter()
                .map(|f| format!("`{}`", f))
                .collect::<Vec<_>>()
                .join(",")
        );
        Self::UniqueConstraint {
            code: UNIQUE_CONSTRAINT_CODE.to_string(),
            fields,
            message,
        }
    }

    /// Engine error code, if the failure carries one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::UniqueConstraint { code, .. } => Some(code.as_str()),
            Self::ForeignKey { .. } => Some(FOREIGN_KEY_CODE),
            Self::Other { code, .. } => code.as_deref(),
            Self::Unavailable(_) => None,
        }
    }

    /// Whether this is the unique-constraint code naming `field`.
    ///
    /// Any variant carrying the code counts. Falls back to the message text
    /// when the engine does not list fields.
    pub fn is_unique_violation_on(&self, field: &str) -> bool {
        if self.code() != Some(UNIQUE_CONSTRAINT_CODE) {
            return false;
        }

        match self {
            Self::UniqueConstraint {
                fields, message, ..
            } => {
                fields.iter().any(|f| f == field)
                    || (fields.is_empty() && message.contains(field))
            }
            Self::Other { message, .. } => message.contains(field),
            _ => false,
        }
    }
}

/// Errors returned by the candidate service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    /// Submission failed validation; nothing was stored
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another candidate already uses this email
    #[error("{}", DUPLICATE_EMAIL_MESSAGE)]
    DuplicateEmail,

    /// Candidate lookup found nothing
    #[error("Candidate not found: {0}")]
    NotFound(CandidateId),

    /// Persistence failure surfaced unchanged
    #[error(transparent)]
    Infrastructure(#[from] RepositoryError),
}

impl CandidateError {
    /// Whether the caller can fix the error by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Infrastructure(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CandidateError
pub type CandidateResult<T> = Result<T, CandidateError>;

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
