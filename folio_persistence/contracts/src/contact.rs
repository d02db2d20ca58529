use std::future::Future;

use folio_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository: Send + Sync + 'static {
    /// Append a validated submission to the contact message log.
    ///
    /// The storage schema is created on demand, so this is safe to call
    /// against an empty database. Every call appends a new record, identical
    /// submissions are not deduplicated.
    fn append(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRepository {
    pub fn with_append(mut self, submission: ContactSubmission) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_append_error(mut self, submission: ContactSubmission, error: &'static str) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
