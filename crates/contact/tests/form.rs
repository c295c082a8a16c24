use std::sync::Arc;

use portfolio_contact::{
    ContactForm, ContactRequest, Field, FieldError, SubmitOutcome, TransportError,
    ValidationErrors,
};

mod helpers;

use helpers::{RecordingTransport, fill};

#[tokio::test]
async fn test_invalid_submission_never_sends() {
    let transport = RecordingTransport::new();
    let form = ContactForm::new(transport.clone());
    fill(&form, " ", "", "hello");

    let outcome = form.submit().await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected invalid outcome, got {outcome:?}");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Name, Field::Email]);
    assert_eq!(form.errors(), errors);
    assert!(transport.sent().is_empty());
    assert!(!form.is_submitted());
    assert!(!form.is_in_flight());
}

#[tokio::test]
async fn test_invalid_email_format_never_sends() {
    let transport = RecordingTransport::new();
    let form = ContactForm::new(transport.clone());
    fill(&form, "Alice", "a @b.com", "Hi");

    let outcome = form.submit().await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected invalid outcome, got {outcome:?}");
    };
    assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidFormat));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_valid_submission_sends_once_and_resets() -> anyhow::Result<()> {
    let transport = RecordingTransport::new();
    let form = ContactForm::new(transport.clone());

    // A failed attempt first so there are errors to clear.
    fill(&form, "", "alice@example.com", "Hi");
    assert!(matches!(form.submit().await, SubmitOutcome::Invalid(_)));
    assert!(!form.errors().is_empty());

    form.update_field(Field::Name, "Alice");
    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(
        transport.sent(),
        vec![ContactRequest {
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            message: "Hi".to_owned(),
        }]
    );
    assert!(form.errors().is_empty());
    assert!(form.submission().is_empty());
    assert!(form.is_submitted());
    assert_eq!(form.last_error(), None);

    Ok(())
}

#[tokio::test]
async fn test_submitted_flag_persists_after_later_edits() {
    let transport = RecordingTransport::new();
    let form = ContactForm::new(transport.clone());
    fill(&form, "Alice", "alice@example.com", "Hi");

    assert_eq!(form.submit().await, SubmitOutcome::Sent);

    form.update_field(Field::Message, "One more thing");
    assert!(form.is_submitted());
}

#[tokio::test]
async fn test_transport_failure_is_recorded_and_keeps_fields() {
    let transport = RecordingTransport::failing(TransportError::Network(
        "connection refused".to_owned(),
    ));
    let form = ContactForm::new(transport.clone());
    fill(&form, "Alice", "alice@example.com", "Hi");

    let outcome = form.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TransportError::Network(_))
    ));
    assert_eq!(transport.sent().len(), 1);
    assert!(!form.is_submitted());
    assert_eq!(form.submission().name, "Alice");
    assert!(matches!(
        form.last_error(),
        Some(TransportError::Network(_))
    ));
    assert!(!form.is_in_flight());
}

#[tokio::test]
async fn test_server_field_errors_are_merged() {
    let rejected = ValidationErrors::from_messages([("email", "Invalid email format")]);
    let transport = RecordingTransport::failing(TransportError::Invalid(rejected));
    let form = ContactForm::new(transport.clone());
    fill(&form, "Alice", "alice@example.invalid", "Hi");

    let outcome = form.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(TransportError::Invalid(_))));
    assert_eq!(
        form.errors().message(Field::Email).as_deref(),
        Some("Invalid email format")
    );
}

#[tokio::test]
async fn test_identical_submissions_are_not_deduplicated() {
    let transport = RecordingTransport::new();
    let form = ContactForm::new(transport.clone());

    fill(&form, "Alice", "alice@example.com", "Hi");
    assert_eq!(form.submit().await, SubmitOutcome::Sent);

    fill(&form, "Alice", "alice@example.com", "Hi");
    assert_eq!(form.submit().await, SubmitOutcome::Sent);

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[tokio::test]
async fn test_overlapping_submit_is_busy() -> anyhow::Result<()> {
    let (transport, gate) = RecordingTransport::gated();
    let form = Arc::new(ContactForm::new(transport.clone()));
    fill(&form, "Alice", "alice@example.com", "Hi");

    let first = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });

    while transport.sent().is_empty() {
        tokio::task::yield_now().await;
    }

    assert!(form.is_in_flight());
    assert_eq!(form.submit().await, SubmitOutcome::Busy);

    gate.notify_one();
    assert_eq!(first.await?, SubmitOutcome::Sent);

    assert_eq!(transport.sent().len(), 1);
    assert!(!form.is_in_flight());

    Ok(())
}
