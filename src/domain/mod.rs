//! Domain value objects and types.
//!
//! Type-safe wrappers for candidate identifiers, email addresses and phone
//! numbers. Each validates at construction time so invalid data cannot be
//! represented past the validator.

pub mod candidate_id;
pub mod date;
pub mod email;
pub mod errors;
pub mod phone;

pub use candidate_id::CandidateId;
pub use date::parse_calendar_date;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{PhoneNumber, PhonePolicy};
