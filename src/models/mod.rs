//! Data models for candidate submissions and persisted candidates.

pub mod candidate;
pub mod submission;

pub use candidate::{
    Candidate, Education, EducationEntry, NewCandidate, NewEducation, NewResume,
    NewWorkExperience, Resume, ResumeReference, ValidatedCandidate, WorkExperience,
    WorkExperienceEntry,
};
pub use submission::{
    CandidateSubmission, EducationSubmission, ResumeSubmission, WorkExperienceSubmission,
};
