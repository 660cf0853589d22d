//! Candidate service layer.
//!
//! Validates submissions and stores them, with their nested records, through
//! a [`CandidateRepository`].

use crate::domain::CandidateId;
use crate::error::{CandidateError, CandidateResult, RepositoryError};
use crate::models::{
    Candidate, CandidateSubmission, NewEducation, NewResume, NewWorkExperience,
};
use crate::repositories::CandidateRepository;
use crate::validator::CandidateValidator;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Candidate service trait for intake operations.
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// Validate a submission and persist it with its nested records.
    ///
    /// Nested records are created one by one after the candidate row; a
    /// failure there is returned as-is and the candidate row stays stored.
    async fn add_candidate(&self, submission: CandidateSubmission) -> CandidateResult<Candidate>;

    /// Fetch a stored candidate with its nested records.
    async fn get_candidate(&self, id: CandidateId) -> CandidateResult<Candidate>;
}

/// Default implementation of CandidateService.
pub struct CandidateServiceImpl {
    repository: Arc<dyn CandidateRepository>,
    validator: CandidateValidator,
}

impl CandidateServiceImpl {
    /// Create a service using the default phone policy.
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self::with_validator(repository, CandidateValidator::default())
    }

    pub fn with_validator(
        repository: Arc<dyn CandidateRepository>,
        validator: CandidateValidator,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }

    fn translate_create_error(err: RepositoryError) -> CandidateError {
        if err.is_unique_violation_on("email") {
            warn!("Rejected candidate with an email already on file");
            CandidateError::DuplicateEmail
        } else {
            error!(error = %err, "Failed to create candidate");
            CandidateError::Infrastructure(err)
        }
    }
}

#[async_trait]
impl CandidateService for CandidateServiceImpl {
    async fn add_candidate(&self, submission: CandidateSubmission) -> CandidateResult<Candidate> {
        let validated = self.validator.validate(&submission).map_err(|e| {
            debug!(field = ?e.field(), reason = %e, "Candidate submission rejected");
            e
        })?;

        let mut candidate = self
            .repository
            .create_candidate(&validated.candidate)
            .await
            .map_err(Self::translate_create_error)?;
        let candidate_id = candidate.id;

        for entry in validated.educations {
            let education = self
                .repository
                .create_education(&NewEducation {
                    candidate_id,
                    entry,
                })
                .await
                .inspect_err(|e| {
                    error!(candidate_id = %candidate_id, error = %e, "Failed to create education")
                })?;
            candidate.educations.push(education);
        }

        for entry in validated.work_experiences {
            let experience = self
                .repository
                .create_work_experience(&NewWorkExperience {
                    candidate_id,
                    entry,
                })
                .await
                .inspect_err(|e| {
                    error!(candidate_id = %candidate_id, error = %e, "Failed to create work experience")
                })?;
            candidate.work_experiences.push(experience);
        }

        if let Some(reference) = validated.resume {
            let resume = self
                .repository
                .create_resume(&NewResume {
                    candidate_id,
                    reference,
                })
                .await
                .inspect_err(|e| {
                    error!(candidate_id = %candidate_id, error = %e, "Failed to create resume")
                })?;
            candidate.resume = Some(resume);
        }

        info!(
            candidate_id = %candidate_id,
            educations = candidate.educations.len(),
            work_experiences = candidate.work_experiences.len(),
            has_resume = candidate.resume.is_some(),
            "Candidate created"
        );

        Ok(candidate)
    }

    async fn get_candidate(&self, id: CandidateId) -> CandidateResult<Candidate> {
        self.repository
            .find_candidate(id)
            .await?
            .ok_or(CandidateError::NotFound(id))
    }
}
