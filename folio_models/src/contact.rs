use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// Raw, untrusted input of the contact form.
///
/// Every field may be missing, empty, oversized or malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact form submission which passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageText,
}

nutype_string!(ContactName(validate(len_char_min = 2, len_char_max = 50)));

nutype_string!(ContactMessageText(validate(
    len_char_min = 10,
    len_char_max = 1000
)));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Violation messages per form field, in the order the rules were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: ContactField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn first(&self, field: ContactField) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &[String])> {
        self.0.iter().map(|(&field, errors)| (field, errors.as_slice()))
    }
}

/// Outcome of a contact form submission as presented to the visitor.
///
/// `field_errors` is present if and only if the submission was rejected
/// because of invalid input. Delivery failures only carry a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSubmissionResult")]
pub struct SubmissionResult {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<FieldErrors>,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn invalid(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: message.into(),
            field_errors: Some(field_errors),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.field_errors.as_ref()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionResultError {
    #[error("a successful submission cannot carry field errors")]
    SuccessWithFieldErrors,
    #[error("field errors must not be empty")]
    EmptyFieldErrors,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmissionResult {
    success: bool,
    message: String,
    #[serde(default)]
    field_errors: Option<FieldErrors>,
}

impl TryFrom<RawSubmissionResult> for SubmissionResult {
    type Error = SubmissionResultError;

    fn try_from(value: RawSubmissionResult) -> Result<Self, Self::Error> {
        match (value.success, value.field_errors) {
            (true, Some(_)) => Err(SubmissionResultError::SuccessWithFieldErrors),
            (false, Some(errors)) if errors.is_empty() => {
                Err(SubmissionResultError::EmptyFieldErrors)
            }
            (true, None) => Ok(Self::success(value.message)),
            (false, None) => Ok(Self::failure(value.message)),
            (false, Some(errors)) => Ok(Self::invalid(value.message, errors)),
        }
    }
}
