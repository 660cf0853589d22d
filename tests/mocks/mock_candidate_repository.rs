use async_trait::async_trait;
use candidate_intake::domain::CandidateId;
use candidate_intake::error::{RepositoryError, RepositoryResult};
use candidate_intake::models::*;
use candidate_intake::repositories::CandidateRepository;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Mock candidate repository for testing.
///
/// Stores records in memory, counts calls per method, and can be scripted to
/// reject the next call to a method with a given error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCandidateRepository {
    candidates: Arc<Mutex<HashMap<CandidateId, Candidate>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    scripted_failures: Arc<Mutex<HashMap<String, VecDeque<RepositoryError>>>>,
    next_id: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockCandidateRepository {
    /// Create a new empty MockCandidateRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call to `method` fail with `error`.
    pub fn fail_next(&self, method: &str, error: RepositoryError) {
        let mut failures = self.scripted_failures.lock().unwrap();
        failures
            .entry(method.to_string())
            .or_default()
            .push_back(error);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Number of stored candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> RepositoryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        let mut failures = self.scripted_failures.lock().unwrap();
        match failures.get_mut(method).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    fn with_owner<T>(
        &self,
        id: CandidateId,
        f: impl FnOnce(&mut Candidate) -> T,
    ) -> RepositoryResult<T> {
        let mut candidates = self.candidates.lock().unwrap();
        candidates
            .get_mut(&id)
            .map(f)
            .ok_or_else(|| RepositoryError::ForeignKey {
                message: format!("candidate {} does not exist", id),
            })
    }
}

#[async_trait]
impl CandidateRepository for MockCandidateRepository {
    async fn create_candidate(&self, candidate: &NewCandidate) -> RepositoryResult<Candidate> {
        self.track_call("create_candidate")?;

        let record = Candidate::from_new(CandidateId::new(self.next_id()), candidate);
        let mut candidates = self.candidates.lock().unwrap();
        if candidates.values().any(|c| c.email == record.email) {
            return Err(RepositoryError::unique_violation(&["email"]));
        }
        candidates.insert(record.id, record.clone());
        Ok(record)
    }

    async fn create_education(&self, education: &NewEducation) -> RepositoryResult<Education> {
        self.track_call("create_education")?;

        let record = Education {
            id: self.next_id(),
            candidate_id: education.candidate_id,
            entry: education.entry.clone(),
        };
        self.with_owner(education.candidate_id, |c| c.educations.push(record.clone()))?;
        Ok(record)
    }

    async fn create_work_experience(
        &self,
        experience: &NewWorkExperience,
    ) -> RepositoryResult<WorkExperience> {
        self.track_call("create_work_experience")?;

        let record = WorkExperience {
            id: self.next_id(),
            candidate_id: experience.candidate_id,
            entry: experience.entry.clone(),
        };
        self.with_owner(experience.candidate_id, |c| {
            c.work_experiences.push(record.clone())
        })?;
        Ok(record)
    }

    async fn create_resume(&self, resume: &NewResume) -> RepositoryResult<Resume> {
        self.track_call("create_resume")?;

        let record = Resume {
            id: self.next_id(),
            candidate_id: resume.candidate_id,
            file_path: resume.reference.file_path.clone(),
            file_type: resume.reference.file_type.clone(),
            upload_date: Utc::now(),
        };
        self.with_owner(resume.candidate_id, |c| c.resume = Some(record.clone()))?;
        Ok(record)
    }

    async fn find_candidate(&self, id: CandidateId) -> RepositoryResult<Option<Candidate>> {
        self.track_call("find_candidate")?;

        let candidates = self.candidates.lock().unwrap();
        Ok(candidates.get(&id).cloned())
    }
}
