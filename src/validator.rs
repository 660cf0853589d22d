//! Candidate submission validator.
//!
//! Validation is pure: no I/O, no shared state, and the same submission
//! always yields the same outcome. Rules run in a fixed order and the first
//! failure wins:
//!
//! 1. `firstName`, `lastName`, `email`, `phone` present and non-blank
//! 2. email format
//! 3. phone against the [`PhonePolicy`]
//! 4. each education entry, in list order
//! 5. each work-experience entry, in list order
//! 6. the resume reference, when present
//!
//! Any defect inside an education or work-experience entry, including a
//! missing institution or company, is reported as `InvalidDate`.

use chrono::NaiveDate;

use crate::domain::{parse_calendar_date, EmailAddress, PhoneNumber, PhonePolicy, ValidationError};
use crate::models::{
    CandidateSubmission, EducationEntry, EducationSubmission, NewCandidate, ResumeReference,
    ResumeSubmission, ValidatedCandidate, WorkExperienceEntry, WorkExperienceSubmission,
};

/// Validates raw submissions into [`ValidatedCandidate`]s.
#[derive(Debug, Clone, Default)]
pub struct CandidateValidator {
    phone_policy: PhonePolicy,
}

impl CandidateValidator {
    pub fn new(phone_policy: PhonePolicy) -> Self {
        Self { phone_policy }
    }

    /// Validate and normalize a submission.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered in rule order.
    pub fn validate(
        &self,
        submission: &CandidateSubmission,
    ) -> Result<ValidatedCandidate, ValidationError> {
        let first_name = required(&submission.first_name, "firstName")?;
        let last_name = required(&submission.last_name, "lastName")?;
        let email = required(&submission.email, "email")?;
        let phone = required(&submission.phone, "phone")?;

        let email = EmailAddress::new(email)?;
        let phone = PhoneNumber::new(phone, &self.phone_policy)?;

        let educations = submission
            .educations
            .iter()
            .enumerate()
            .map(|(index, education)| validate_education(index, education))
            .collect::<Result<Vec<_>, _>>()?;

        let work_experiences = submission
            .work_experiences
            .iter()
            .enumerate()
            .map(|(index, experience)| validate_work_experience(index, experience))
            .collect::<Result<Vec<_>, _>>()?;

        let resume = submission.cv.as_ref().map(validate_resume).transpose()?;

        Ok(ValidatedCandidate {
            candidate: NewCandidate {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                phone,
                address: optional(&submission.address),
            },
            educations,
            work_experiences,
            resume,
        })
    }
}

/// Validate a submission with the default phone policy.
pub fn validate_candidate_data(
    submission: &CandidateSubmission,
) -> Result<ValidatedCandidate, ValidationError> {
    CandidateValidator::default().validate(submission)
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ValidationError::missing(field))
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn entry_field<'a>(value: &'a Option<String>, field: String) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::InvalidDate { field })
}

/// Parse a required start date and an optional end date that must not precede it.
fn date_range(
    prefix: &str,
    start: &Option<String>,
    end: &Option<String>,
) -> Result<(NaiveDate, Option<NaiveDate>), ValidationError> {
    let start = start
        .as_deref()
        .and_then(parse_calendar_date)
        .ok_or_else(|| ValidationError::invalid_date(format!("{prefix}.startDate")))?;

    let end = match end.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        None => None,
        Some(raw) => {
            let end = parse_calendar_date(raw)
                .filter(|end| *end >= start)
                .ok_or_else(|| ValidationError::invalid_date(format!("{prefix}.endDate")))?;
            Some(end)
        }
    };

    Ok((start, end))
}

fn validate_education(
    index: usize,
    education: &EducationSubmission,
) -> Result<EducationEntry, ValidationError> {
    let prefix = format!("educations[{index}]");
    let institution = entry_field(&education.institution, format!("{prefix}.institution"))?;
    let title = entry_field(&education.title, format!("{prefix}.title"))?;
    let (start_date, end_date) = date_range(&prefix, &education.start_date, &education.end_date)?;

    Ok(EducationEntry {
        institution: institution.to_string(),
        title: title.to_string(),
        start_date,
        end_date,
    })
}

fn validate_work_experience(
    index: usize,
    experience: &WorkExperienceSubmission,
) -> Result<WorkExperienceEntry, ValidationError> {
    let prefix = format!("workExperiences[{index}]");
    let company = entry_field(&experience.company, format!("{prefix}.company"))?;
    let position = entry_field(&experience.position, format!("{prefix}.position"))?;
    let (start_date, end_date) =
        date_range(&prefix, &experience.start_date, &experience.end_date)?;

    Ok(WorkExperienceEntry {
        company: company.to_string(),
        position: position.to_string(),
        description: optional(&experience.description),
        start_date,
        end_date,
    })
}

fn validate_resume(cv: &ResumeSubmission) -> Result<ResumeReference, ValidationError> {
    let file_path = required(&cv.file_path, "cv.filePath")?;
    let file_type = required(&cv.file_type, "cv.fileType")?;

    Ok(ResumeReference {
        file_path: file_path.to_string(),
        file_type: file_type.to_string(),
    })
}
