use std::sync::Arc;

use anyhow::Context;
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_di::Build;
use folio_email_contracts::{template::TemplateEmailService, EmailSendError};
use folio_models::{
    contact::{ContactForm, ContactSubmission, SubmissionResult},
    email_address::{EmailAddress, EmailAddressWithName},
};
use folio_persistence_contracts::contact::ContactRepository;
use folio_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};
use tracing::{error, info, warn};

mod validation;

#[cfg(test)]
mod tests;

/// Number of characters of the visitor's message quoted in the confirmation.
const EXCERPT_LENGTH: usize = 100;

const INVALID_FORM_MESSAGE: &str = "Please fix the errors below.";

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<ContactRepo, TemplateEmail> {
    contact_repo: ContactRepo,
    template_email: TemplateEmail,
    config: Arc<ContactFeatureConfig>,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Recipient of the notification about a new submission.
    pub owner: EmailAddressWithName,
    pub notification_sender: EmailAddressWithName,
    pub confirmation_sender: EmailAddressWithName,
    /// Address offered to the visitor when delivery fails.
    pub fallback: EmailAddress,
    pub signature: Vec<String>,
    pub profile_url: Option<String>,
}

impl<ContactRepo, TemplateEmail> ContactFeatureService
    for ContactFeatureServiceImpl<ContactRepo, TemplateEmail>
where
    ContactRepo: ContactRepository,
    TemplateEmail: TemplateEmailService,
{
    async fn submit(&self, form: ContactForm) -> SubmissionResult {
        match self.process(form).await {
            Ok(submission) => SubmissionResult::success(format!(
                "Thank you, {}! Your message has been sent successfully. I'll get back to you \
                 soon. Check your email for a confirmation.",
                *submission.name
            )),
            Err(err) => self.failure(err),
        }
    }
}

impl<ContactRepo, TemplateEmail> ContactFeatureServiceImpl<ContactRepo, TemplateEmail>
where
    ContactRepo: ContactRepository,
    TemplateEmail: TemplateEmailService,
{
    async fn process(&self, form: ContactForm) -> Result<ContactSubmission, ContactSubmitError> {
        let submission = validation::validate(&form).map_err(ContactSubmitError::Validation)?;

        self.contact_repo
            .append(&submission)
            .await
            .context("Failed to store contact message")
            .map_err(ContactSubmitError::Delivery)?;

        let submitter = submission
            .email
            .clone()
            .with_name(submission.name.clone().into_inner());

        let notification = ContactNotificationTemplate {
            name: submission.name.clone().into_inner(),
            email: submission.email.as_str().into(),
            message: submission.message.clone().into_inner(),
        };

        let receipt = self
            .template_email
            .send_contact_notification(
                self.config.notification_sender.clone(),
                self.config.owner.clone(),
                submitter.clone(),
                &notification,
            )
            .await
            .map_err(|err| match err {
                EmailSendError::MissingApiKey => ContactSubmitError::Configuration,
                err @ (EmailSendError::Rejected { .. } | EmailSendError::Transport(_)) => {
                    ContactSubmitError::Delivery(
                        anyhow::Error::new(err).context("Failed to notify owner"),
                    )
                }
                EmailSendError::Other(err) => {
                    ContactSubmitError::Other(err.context("Failed to notify owner"))
                }
            })?;
        info!(id = %receipt.id, "Sent contact notification");

        let confirmation = ContactConfirmationTemplate {
            name: submission.name.clone().into_inner(),
            excerpt: excerpt(&submission.message, EXCERPT_LENGTH),
            profile_url: self.config.profile_url.clone(),
            signature: self.config.signature.clone(),
        };

        match self
            .template_email
            .send_contact_confirmation(
                self.config.confirmation_sender.clone(),
                submitter,
                &confirmation,
            )
            .await
        {
            Ok(receipt) => info!(id = %receipt.id, "Sent contact confirmation"),
            Err(err) => warn!("Failed to send contact confirmation: {err}"),
        }

        Ok(submission)
    }

    fn failure(&self, err: ContactSubmitError) -> SubmissionResult {
        let fallback = &self.config.fallback;
        match err {
            ContactSubmitError::Validation(field_errors) => {
                SubmissionResult::invalid(INVALID_FORM_MESSAGE, field_errors)
            }
            ContactSubmitError::Configuration => {
                error!("Cannot deliver contact message: email api key is missing");
                SubmissionResult::failure(format!(
                    "Email delivery is not configured. Please contact me directly at {fallback}."
                ))
            }
            ContactSubmitError::Delivery(err) | ContactSubmitError::Other(err) => {
                error!("Failed to process contact submission: {err:#}");
                SubmissionResult::failure(format!(
                    "Sorry, there was an error sending your message. Please try again later or \
                     contact me directly at {fallback}"
                ))
            }
        }
    }
}

/// Return the first `max` characters of `text`, followed by `...` if anything
/// was cut off.
fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.into(),
    }
}

#[cfg(test)]
impl Default for ContactFeatureConfig {
    fn default() -> Self {
        Self {
            owner: "Mael Andria <owner@example.com>".parse().unwrap(),
            notification_sender: "Portfolio Contact <onboarding@resend.dev>".parse().unwrap(),
            confirmation_sender: "Mael Andria <onboarding@resend.dev>".parse().unwrap(),
            fallback: "owner@example.com".parse().unwrap(),
            signature: vec!["Mael Andria".into(), "Full-Stack Developer".into()],
            profile_url: Some("https://github.com/KimADR".into()),
        }
    }
}
