//! Client side of the contact form.
//!
//! [`FormController`] holds the field values, gates double submission and
//! turns a [`SubmissionResult`] into notifications and inline field errors.

use folio_core_contact_contracts::ContactFeatureService;
use folio_models::contact::{ContactField, ContactForm, FieldErrors, SubmissionResult};

pub use crate::{
    client::HttpContactClient,
    notifier::{Notification, NotificationKind, Notifier, TerminalNotifier},
};

mod client;
mod notifier;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A submission is in flight, inputs are disabled.
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler answered, `true` if the submission succeeded.
    Completed(bool),
    /// Another submission was still pending.
    Ignored,
}

#[derive(Debug)]
pub struct FormController<Handler, N> {
    handler: Handler,
    notifier: N,
    name: String,
    email: String,
    message: String,
    phase: FormPhase,
    field_errors: FieldErrors,
}

impl<Handler, N> FormController<Handler, N>
where
    Handler: ContactFeatureService,
    N: Notifier,
{
    pub fn new(handler: Handler, notifier: N) -> Self {
        Self {
            handler,
            notifier,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            phase: FormPhase::Idle,
            field_errors: FieldErrors::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Pending
    }

    /// Update a field. Returns `false` without changing anything while a
    /// submission is pending.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_pending() {
            return false;
        }

        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        true
    }

    /// First error of the last failed submission for the given field.
    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        self.field_errors.first(field)
    }

    /// Switch to [`FormPhase::Pending`] and return the current field values.
    ///
    /// Returns `None` if a submission is already pending.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_pending() {
            return None;
        }

        self.phase = FormPhase::Pending;
        Some(ContactForm {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            message: Some(self.message.clone()),
        })
    }

    /// Apply the result of a submission and notify the visitor. Returns
    /// whether the submission succeeded.
    pub fn complete_submit(&mut self, result: SubmissionResult) -> bool {
        self.phase = FormPhase::Idle;

        if result.is_success() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.field_errors = FieldErrors::default();
            self.notifier
                .notify(Notification::positive(result.message()));
            return true;
        }

        self.field_errors = result.field_errors().cloned().unwrap_or_default();
        self.notifier
            .notify(Notification::negative(result.message()));
        false
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(form) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        let result = self.handler.submit(form).await;
        SubmitOutcome::Completed(self.complete_submit(result))
    }
}
