//! Unit tests for contact submission handling

use portfolio_backend::contact::{
    is_valid_email, ContactRequest, ContactSink, MemorySink, TracingSink, MSG_FIELDS_REQUIRED,
    MSG_INVALID_EMAIL,
};
use portfolio_backend::AppError;

fn create_request(name: &str, email: &str, subject: Option<&str>, message: &str) -> ContactRequest {
    ContactRequest {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        subject: subject.map(String::from),
        message: Some(message.to_string()),
    }
}

#[test]
fn test_empty_request_requires_fields() {
    let err = ContactRequest::default().validate().unwrap_err();

    assert!(matches!(err, AppError::Validation(ref m) if m == MSG_FIELDS_REQUIRED));
}

#[test]
fn test_missing_message() {
    let mut request = create_request("A", "a@b.com", None, "hi");
    request.message = None;

    let err = request.validate().unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m == MSG_FIELDS_REQUIRED));
}

#[test]
fn test_invalid_email() {
    let err = create_request("A", "not-an-email", None, "hi")
        .validate()
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ref m) if m == MSG_INVALID_EMAIL));
}

#[test]
fn test_email_regex_edge_cases() {
    assert!(is_valid_email("x@y.z"));
    assert!(is_valid_email("a.b+c@sub.domain.io"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a@bcom"));
    assert!(!is_valid_email("a@b.com "));
    assert!(!is_valid_email(""));
}

#[test]
fn test_subject_is_optional() {
    let submission = create_request("A", "a@b.com", Some("Hello"), "hi")
        .validate()
        .unwrap();
    assert_eq!(submission.subject.as_deref(), Some("Hello"));

    let submission = create_request("A", "a@b.com", None, "hi").validate().unwrap();
    assert!(submission.subject.is_none());
}

#[test]
fn test_submissions_get_distinct_ids() {
    let first = create_request("A", "a@b.com", None, "hi").validate().unwrap();
    let second = create_request("A", "a@b.com", None, "hi").validate().unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn test_memory_sink_records() {
    let sink = MemorySink::new();
    assert!(sink.is_empty());

    let submission = create_request("A", "a@b.com", None, "hi").validate().unwrap();
    sink.record(&submission).unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.submissions()[0].id, submission.id);
    assert_eq!(sink.name(), "memory");
}

#[test]
fn test_tracing_sink_accepts() {
    let submission = create_request("A", "a@b.com", Some("s"), "hi")
        .validate()
        .unwrap();
    assert!(TracingSink.record(&submission).is_ok());
}
