//! Raw candidate submission as received from the enclosing request handler.
//!
//! Every scalar is optional so that absent keys survive deserialization and
//! are reported by the validator instead of by serde.

use serde::{Deserialize, Serialize};

/// Candidate personal data plus nested records, unvalidated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub educations: Vec<EducationSubmission>,
    pub work_experiences: Vec<WorkExperienceSubmission>,
    /// Reference to an already uploaded resume file.
    pub cv: Option<ResumeSubmission>,
}

impl CandidateSubmission {
    /// Submission with the four required personal fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            ..Default::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_education(mut self, education: EducationSubmission) -> Self {
        self.educations.push(education);
        self
    }

    pub fn with_work_experience(mut self, experience: WorkExperienceSubmission) -> Self {
        self.work_experiences.push(experience);
        self
    }

    pub fn with_cv(mut self, file_path: impl Into<String>, file_type: impl Into<String>) -> Self {
        self.cv = Some(ResumeSubmission {
            file_path: Some(file_path.into()),
            file_type: Some(file_type.into()),
        });
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationSubmission {
    pub institution: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl EducationSubmission {
    pub fn new(
        institution: impl Into<String>,
        title: impl Into<String>,
        start_date: impl Into<String>,
        end_date: Option<&str>,
    ) -> Self {
        Self {
            institution: Some(institution.into()),
            title: Some(title.into()),
            start_date: Some(start_date.into()),
            end_date: end_date.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperienceSubmission {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl WorkExperienceSubmission {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        start_date: impl Into<String>,
        end_date: Option<&str>,
    ) -> Self {
        Self {
            company: Some(company.into()),
            position: Some(position.into()),
            description: None,
            start_date: Some(start_date.into()),
            end_date: end_date.map(str::to_string),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeSubmission {
    pub file_path: Option<String>,
    pub file_type: Option<String>,
}
