use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::CandidateId;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::*;
use crate::repositories::traits::CandidateRepository;

#[derive(Debug, Default)]
struct Store {
    candidates: BTreeMap<CandidateId, Candidate>,
    emails: HashMap<String, CandidateId>,
    last_candidate_id: u64,
    last_record_id: u64,
}

impl Store {
    fn next_record_id(&mut self) -> u64 {
        self.last_record_id += 1;
        self.last_record_id
    }

    fn owner_mut(&mut self, id: CandidateId) -> RepositoryResult<&mut Candidate> {
        self.candidates
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::ForeignKey {
                message: format!("candidate {} does not exist", id),
            })
    }
}

/// In-process candidate store.
///
/// Identifiers are sequential from 1. The email uniqueness check and the
/// insert happen under one write lock, so concurrent duplicates cannot both
/// succeed. Emails are compared exactly as stored.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    store: RwLock<Store>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored candidates.
    pub async fn len(&self) -> usize {
        self.store.read().await.candidates.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn create_candidate(&self, candidate: &NewCandidate) -> RepositoryResult<Candidate> {
        let mut store = self.store.write().await;

        if store.emails.contains_key(candidate.email.as_str()) {
            return Err(RepositoryError::unique_violation(&["email"]));
        }

        store.last_candidate_id += 1;
        let id = CandidateId::new(store.last_candidate_id);
        let record = Candidate::from_new(id, candidate);

        store.emails.insert(record.email.clone(), id);
        store.candidates.insert(id, record.clone());
        Ok(record)
    }

    async fn create_education(&self, education: &NewEducation) -> RepositoryResult<Education> {
        let mut store = self.store.write().await;
        store.owner_mut(education.candidate_id)?;

        let record = Education {
            id: store.next_record_id(),
            candidate_id: education.candidate_id,
            entry: education.entry.clone(),
        };
        store
            .owner_mut(education.candidate_id)?
            .educations
            .push(record.clone());
        Ok(record)
    }

    async fn create_work_experience(
        &self,
        experience: &NewWorkExperience,
    ) -> RepositoryResult<WorkExperience> {
        let mut store = self.store.write().await;
        store.owner_mut(experience.candidate_id)?;

        let record = WorkExperience {
            id: store.next_record_id(),
            candidate_id: experience.candidate_id,
            entry: experience.entry.clone(),
        };
        store
            .owner_mut(experience.candidate_id)?
            .work_experiences
            .push(record.clone());
        Ok(record)
    }

    async fn create_resume(&self, resume: &NewResume) -> RepositoryResult<Resume> {
        let mut store = self.store.write().await;
        if store.owner_mut(resume.candidate_id)?.resume.is_some() {
            return Err(RepositoryError::unique_violation(&["candidateId"]));
        }

        let record = Resume {
            id: store.next_record_id(),
            candidate_id: resume.candidate_id,
            file_path: resume.reference.file_path.clone(),
            file_type: resume.reference.file_type.clone(),
            upload_date: Utc::now(),
        };
        store.owner_mut(resume.candidate_id)?.resume = Some(record.clone());
        Ok(record)
    }

    async fn find_candidate(&self, id: CandidateId) -> RepositoryResult<Option<Candidate>> {
        Ok(self.store.read().await.candidates.get(&id).cloned())
    }
}
