use folio_core_contact_contracts::MockContactFeatureService;
use folio_models::contact::{ContactField, ContactForm, FieldErrors, SubmissionResult};
use pretty_assertions::assert_eq;

use crate::{
    notifier::MockNotifier, FormController, FormPhase, Notification, NotificationKind,
    SubmitOutcome,
};

type Sut = FormController<MockContactFeatureService, MockNotifier>;

fn filled(handler: MockContactFeatureService, notifier: MockNotifier) -> Sut {
    let mut sut = FormController::new(handler, notifier);
    sut.set(ContactField::Name, "Al");
    sut.set(ContactField::Email, "al@example.com");
    sut.set(ContactField::Message, "Hello there, this is a test.");
    sut
}

fn form() -> ContactForm {
    ContactForm {
        name: Some("Al".into()),
        email: Some("al@example.com".into()),
        message: Some("Hello there, this is a test.".into()),
    }
}

#[test]
fn begin_twice_is_ignored() {
    // Arrange
    let mut sut = filled(MockContactFeatureService::new(), MockNotifier::new());

    // Act
    let first = sut.begin_submit();
    let second = sut.begin_submit();

    // Assert
    assert_eq!(first, Some(form()));
    assert_eq!(second, None);
    assert_eq!(sut.phase(), FormPhase::Pending);
}

#[test]
fn inputs_disabled_while_pending() {
    // Arrange
    let mut sut = filled(MockContactFeatureService::new(), MockNotifier::new());
    sut.begin_submit();

    // Act
    let changed = sut.set(ContactField::Name, "Bob");

    // Assert
    assert!(!changed);
    assert_eq!(sut.name(), "Al");
}

#[tokio::test]
async fn success_clears_fields() {
    // Arrange
    let handler = MockContactFeatureService::new()
        .with_submit(form(), SubmissionResult::success("Thank you, Al!"));
    let notifier = MockNotifier::new().with_notify(Notification::positive("Thank you, Al!"));
    let mut sut = filled(handler, notifier);

    // Act
    let outcome = sut.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Completed(true));
    assert_eq!(sut.phase(), FormPhase::Idle);
    assert_eq!((sut.name(), sut.email(), sut.message()), ("", "", ""));
}

#[tokio::test]
async fn validation_failure_keeps_fields() {
    // Arrange
    let mut errors = FieldErrors::default();
    errors.push(ContactField::Message, "Message must be at least 10 characters");
    errors.push(ContactField::Message, "second error is not shown");

    let handler = MockContactFeatureService::new().with_submit(
        form(),
        SubmissionResult::invalid("Please fix the errors below.", errors),
    );
    let notifier =
        MockNotifier::new().with_notify(Notification::negative("Please fix the errors below."));
    let mut sut = filled(handler, notifier);

    // Act
    let outcome = sut.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Completed(false));
    assert!(!sut.is_pending());
    assert_eq!(sut.name(), "Al");
    assert_eq!(sut.message(), "Hello there, this is a test.");
    assert_eq!(
        sut.field_error(ContactField::Message),
        Some("Message must be at least 10 characters")
    );
    assert_eq!(sut.field_error(ContactField::Name), None);
}

#[test]
fn success_after_failure_clears_field_errors() {
    // Arrange
    let mut errors = FieldErrors::default();
    errors.push(ContactField::Name, "Name must be at least 2 characters");

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(2).return_const(());
    let mut sut = filled(MockContactFeatureService::new(), notifier);

    sut.begin_submit();
    sut.complete_submit(SubmissionResult::invalid("Please fix the errors below.", errors));

    // Act
    sut.begin_submit();
    let success = sut.complete_submit(SubmissionResult::success("Thank you, Al!"));

    // Assert
    assert!(success);
    assert_eq!(sut.field_error(ContactField::Name), None);
}

#[tokio::test]
async fn delivery_failure_notifies_negative() {
    // Arrange
    let handler = MockContactFeatureService::new()
        .with_submit(form(), SubmissionResult::failure("Sorry, try again later."));
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .once()
        .withf(|n| n.kind == NotificationKind::Negative && n.auto_dismiss.is_some())
        .return_const(());
    let mut sut = filled(handler, notifier);

    // Act
    let outcome = sut.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Completed(false));
    assert_eq!(sut.email(), "al@example.com");
    assert_eq!(sut.field_error(ContactField::Email), None);
}

#[tokio::test]
async fn submit_while_pending_is_ignored() {
    // Arrange
    let mut sut = filled(MockContactFeatureService::new(), MockNotifier::new());
    sut.begin_submit();

    // Act
    let outcome = sut.submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Ignored);
}
