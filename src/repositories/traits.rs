use crate::domain::CandidateId;
use crate::error::RepositoryResult;
use crate::models::*;
use async_trait::async_trait;

/// Persistence collaborator for candidates and the records they own.
///
/// Implementations enforce email uniqueness themselves, reporting a
/// violation as [`RepositoryError::UniqueConstraint`] with code `P2002`
/// naming the `email` field. Concurrent duplicate submissions are only
/// safe if that check is atomic with the insert.
///
/// [`RepositoryError::UniqueConstraint`]: crate::error::RepositoryError::UniqueConstraint
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Insert a candidate row and return it with its generated identifier.
    async fn create_candidate(&self, candidate: &NewCandidate) -> RepositoryResult<Candidate>;

    /// Insert an education row owned by an existing candidate.
    async fn create_education(&self, education: &NewEducation) -> RepositoryResult<Education>;

    /// Insert a work-experience row owned by an existing candidate.
    async fn create_work_experience(
        &self,
        experience: &NewWorkExperience,
    ) -> RepositoryResult<WorkExperience>;

    /// Insert the resume reference of an existing candidate.
    async fn create_resume(&self, resume: &NewResume) -> RepositoryResult<Resume>;

    /// Fetch a candidate with its nested records.
    async fn find_candidate(&self, id: CandidateId) -> RepositoryResult<Option<Candidate>>;
}
