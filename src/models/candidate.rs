//! Validated and persisted candidate records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CandidateId, EmailAddress, PhoneNumber};

/// Validated education entry, not yet tied to a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Validated work-experience entry, not yet tied to a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Validated pointer to an already stored resume file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReference {
    pub file_path: String,
    pub file_type: String,
}

/// Candidate row data handed to the repository's create operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Output of the validator: normalized candidate data plus nested entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCandidate {
    #[serde(flatten)]
    pub candidate: NewCandidate,
    pub educations: Vec<EducationEntry>,
    pub work_experiences: Vec<WorkExperienceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    pub candidate_id: CandidateId,
    #[serde(flatten)]
    pub entry: EducationEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkExperience {
    pub candidate_id: CandidateId,
    #[serde(flatten)]
    pub entry: WorkExperienceEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewResume {
    pub candidate_id: CandidateId,
    #[serde(flatten)]
    pub reference: ResumeReference,
}

/// Persisted education row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u64,
    pub candidate_id: CandidateId,
    #[serde(flatten)]
    pub entry: EducationEntry,
}

/// Persisted work-experience row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: u64,
    pub candidate_id: CandidateId,
    #[serde(flatten)]
    pub entry: WorkExperienceEntry,
}

/// Persisted resume row; `upload_date` is assigned by storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: u64,
    pub candidate_id: CandidateId,
    pub file_path: String,
    pub file_type: String,
    pub upload_date: DateTime<Utc>,
}

/// A persisted candidate together with the records it owns.
///
/// Education, work-experience and resume rows belong to the candidate and
/// go away with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<Resume>,
}

impl Candidate {
    /// Build the stored row for `new` under a freshly generated identifier.
    pub fn from_new(id: CandidateId, new: &NewCandidate) -> Self {
        Self {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.as_str().to_string(),
            phone: new.phone.as_str().to_string(),
            address: new.address.clone(),
            educations: Vec::new(),
            work_experiences: Vec::new(),
            resume: None,
        }
    }
}
