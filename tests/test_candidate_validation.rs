//! Form validation tests for candidate submissions.

use candidate_intake::{
    validate_candidate_data, CandidateSubmission, EducationSubmission, ValidationError,
    WorkExperienceSubmission,
};
use tokio_test::{assert_err, assert_ok};

fn mock_valid_data() -> CandidateSubmission {
    CandidateSubmission::new("Juan", "Pérez", "juan.perez@test.com", "666777888")
        .with_address("Calle Test 123")
        .with_education(EducationSubmission::new(
            "Universidad Test",
            "Ingeniería",
            "2020-01-01",
            Some("2024-01-01"),
        ))
        .with_work_experience(
            WorkExperienceSubmission::new(
                "Empresa Test",
                "Desarrollador",
                "2024-01-01",
                Some("2024-03-01"),
            )
            .with_description("Desarrollo de aplicaciones"),
        )
}

#[test]
fn test_validates_correct_data() {
    let validated = assert_ok!(validate_candidate_data(&mock_valid_data()));
    assert_eq!(validated.candidate.email.as_str(), "juan.perez@test.com");
    assert_eq!(validated.candidate.address.as_deref(), Some("Calle Test 123"));
}

#[test]
fn test_validates_minimal_data() {
    let submission = CandidateSubmission::new("Ana", "López", "ana@test.es", "712345678");
    let validated = assert_ok!(validate_candidate_data(&submission));
    assert!(validated.educations.is_empty());
    assert!(validated.work_experiences.is_empty());
    assert!(validated.resume.is_none());
}

#[test]
fn test_fails_with_invalid_email() {
    let invalid_data = CandidateSubmission {
        email: Some("invalid-email".to_string()),
        ..mock_valid_data()
    };
    let err = assert_err!(validate_candidate_data(&invalid_data));
    assert_eq!(err, ValidationError::InvalidEmail);
    assert_eq!(err.to_string(), "Invalid email");
}

#[test]
fn test_fails_with_invalid_phone() {
    let invalid_data = CandidateSubmission {
        phone: Some("123".to_string()),
        ..mock_valid_data()
    };
    let err = assert_err!(validate_candidate_data(&invalid_data));
    assert_eq!(err, ValidationError::InvalidPhone);
    assert_eq!(err.to_string(), "Invalid phone");
}

#[test]
fn test_fails_with_invalid_education_date() {
    let mut invalid_data = mock_valid_data();
    invalid_data.educations[0].start_date = Some("invalid-date".to_string());

    let err = assert_err!(validate_candidate_data(&invalid_data));
    assert!(matches!(err, ValidationError::InvalidDate { .. }));
    assert_eq!(err.to_string(), "Invalid date");
}

#[test]
fn test_fails_with_invalid_work_experience_end_date() {
    let mut invalid_data = mock_valid_data();
    invalid_data.work_experiences[0].end_date = Some("2024-02-31".to_string());

    let err = assert_err!(validate_candidate_data(&invalid_data));
    assert_eq!(err.to_string(), "Invalid date");
    assert_eq!(err.field(), Some("workExperiences[0].endDate"));
}

#[test]
fn test_fails_with_work_experience_ending_before_start() {
    let mut invalid_data = mock_valid_data();
    invalid_data.work_experiences[0].start_date = Some("2024-03-01".to_string());
    invalid_data.work_experiences[0].end_date = Some("2024-01-15".to_string());

    let err = assert_err!(validate_candidate_data(&invalid_data));
    assert_eq!(
        err,
        ValidationError::InvalidDate {
            field: "workExperiences[0].endDate".to_string()
        }
    );
    assert_eq!(err.to_string(), "Invalid date");
}

#[test]
fn test_fails_with_missing_required_field() {
    for field in ["firstName", "lastName", "email", "phone"] {
        let mut data = mock_valid_data();
        match field {
            "firstName" => data.first_name = None,
            "lastName" => data.last_name = Some(String::new()),
            "email" => data.email = None,
            _ => data.phone = Some("   ".to_string()),
        }

        let err = assert_err!(validate_candidate_data(&data));
        assert_eq!(
            err,
            ValidationError::MissingRequiredField {
                field: field.to_string()
            }
        );
    }
}

#[test]
fn test_validates_json_submission() {
    let json = r#"{
        "firstName": "Juan",
        "lastName": "Pérez",
        "email": "juan.perez@test.com",
        "phone": "666777888",
        "educations": [{
            "institution": "Universidad Test",
            "title": "Ingeniería",
            "startDate": "2020-01-01T00:00:00.000Z"
        }]
    }"#;
    let submission: CandidateSubmission = serde_json::from_str(json).unwrap();
    let validated = assert_ok!(validate_candidate_data(&submission));
    assert_eq!(validated.educations[0].start_date.to_string(), "2020-01-01");
}

#[test]
fn test_validation_is_idempotent() {
    let valid = mock_valid_data();
    assert_eq!(
        validate_candidate_data(&valid).unwrap(),
        validate_candidate_data(&valid).unwrap()
    );

    let mut invalid = mock_valid_data();
    invalid.educations[0].start_date = Some("invalid-date".to_string());
    let first = validate_candidate_data(&invalid).unwrap_err();
    let second = validate_candidate_data(&invalid).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
