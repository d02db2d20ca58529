use std::future::Future;

use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};

use crate::{EmailReceipt, EmailSendError};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Notify the site owner about a new contact submission. Replies go to
    /// `reply_to`.
    fn send_contact_notification(
        &self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> impl Future<Output = Result<EmailReceipt, EmailSendError>> + Send;

    /// Confirm to the visitor that their message has been received.
    fn send_contact_confirmation(
        &self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> impl Future<Output = Result<EmailReceipt, EmailSendError>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_notification(
        mut self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ContactNotificationTemplate,
        result: Result<&'static str, EmailSendError>,
    ) -> Self {
        self.expect_send_contact_notification()
            .once()
            .with(
                mockall::predicate::eq(from),
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _, _| Box::pin(std::future::ready(receipt(result))));
        self
    }

    pub fn with_send_contact_confirmation(
        mut self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        data: ContactConfirmationTemplate,
        result: Result<&'static str, EmailSendError>,
    ) -> Self {
        self.expect_send_contact_confirmation()
            .once()
            .with(
                mockall::predicate::eq(from),
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(receipt(result))));
        self
    }
}

#[cfg(feature = "mock")]
fn receipt(result: Result<&'static str, EmailSendError>) -> Result<EmailReceipt, EmailSendError> {
    result.map(|id| EmailReceipt { id: id.into() })
}
