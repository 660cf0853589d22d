//! Candidate Intake - validation and persistence core for an applicant-tracking tool.
//!
//! A raw [`CandidateSubmission`] is checked by the [`validator`] and then
//! stored, together with its education, work-experience and resume records,
//! by a [`CandidateService`] through a [`CandidateRepository`].
//!
//! # Architecture
//!
//! - **domain**: Value objects (candidate id, email, phone) and validation errors
//! - **models**: Raw submissions, validated data and persisted records
//! - **validator**: Pure, ordered submission validation
//! - **repositories**: Persistence collaborator trait and an in-memory store
//! - **services**: Intake orchestration and storage error translation
//! - **error**: Service, repository and configuration error types
//! - **config**: Configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validator;

pub use config::Config;
pub use domain::{CandidateId, EmailAddress, PhoneNumber, PhonePolicy, ValidationError};
pub use error::{CandidateError, CandidateResult, ConfigError, RepositoryError, RepositoryResult};
pub use models::{
    Candidate, CandidateSubmission, EducationSubmission, ValidatedCandidate,
    WorkExperienceSubmission,
};
pub use repositories::{CandidateRepository, InMemoryCandidateRepository};
pub use services::{CandidateService, CandidateServiceImpl};
pub use validator::{validate_candidate_data, CandidateValidator};
