//! Application service layer.
//!
//! Services contain the intake business logic and sit between the enclosing
//! request handler and the data access layer.

mod candidate_service;

pub use candidate_service::{CandidateService, CandidateServiceImpl};

// Re-export common types used by services
pub use crate::models::{Candidate, CandidateSubmission};
