use std::future::Future;

use folio_models::contact::{ContactForm, FieldErrors, SubmissionResult};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate, store and deliver a contact form submission.
    ///
    /// Never fails: every error is mapped to an unsuccessful
    /// [`SubmissionResult`] with a message suitable for the visitor.
    fn submit(&self, form: ContactForm) -> impl Future<Output = SubmissionResult> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The contact form contains invalid fields.")]
    Validation(FieldErrors),
    #[error("Email delivery is not configured.")]
    Configuration,
    #[error("Failed to deliver the contact message.")]
    Delivery(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(mut self, form: ContactForm, result: SubmissionResult) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
