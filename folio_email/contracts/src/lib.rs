use std::future::Future;

use folio_models::email_address::EmailAddressWithName;
use thiserror::Error;

pub mod template;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand a single email over to the delivery provider.
    fn send(&self, email: Email) -> impl Future<Output = Result<EmailReceipt, EmailSendError>> + Send;

    /// Check that the delivery provider is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: EmailAddressWithName,
    pub recipient: EmailAddressWithName,
    pub reply_to: Option<EmailAddressWithName>,
    pub subject: String,
    pub html: Option<String>,
    pub text: String,
}

/// Confirmation of the provider that it accepted an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceipt {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    #[error("No API key has been configured for the email provider.")]
    MissingApiKey,
    #[error("The email provider rejected the email with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("The email provider could not be reached.")]
    Transport(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, id: &'static str) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                Box::pin(std::future::ready(Ok(EmailReceipt { id: id.into() })))
            });
        self
    }

    pub fn with_send_error(mut self, email: Email, error: EmailSendError) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }

    pub fn with_ping(mut self, result: Result<(), &'static str>) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(result.map_err(anyhow::Error::msg)))
        });
        self
    }
}
