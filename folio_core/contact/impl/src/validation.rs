use std::ops::RangeInclusive;

use folio_models::{
    contact::{
        ContactField, ContactForm, ContactMessageText, ContactName, ContactSubmission, FieldErrors,
    },
    email_address::EmailAddress,
};

const NAME_LENGTH: RangeInclusive<usize> = 2..=50;
const MESSAGE_LENGTH: RangeInclusive<usize> = 10..=1000;

const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Check every field of the form and collect all violations.
///
/// Missing fields are treated like empty ones.
pub(crate) fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = form.name.as_deref().unwrap_or_default();
    let name = ContactName::try_new(name.to_owned())
        .inspect_err(|_| {
            errors.push(ContactField::Name, length_violation("Name", name, NAME_LENGTH))
        })
        .ok();

    let email = EmailAddress::parse_submitted(form.email.as_deref().unwrap_or_default());
    if email.is_none() {
        errors.push(ContactField::Email, INVALID_EMAIL);
    }

    let message = form.message.as_deref().unwrap_or_default();
    let message = ContactMessageText::try_new(message.to_owned())
        .inspect_err(|_| {
            errors.push(
                ContactField::Message,
                length_violation("Message", message, MESSAGE_LENGTH),
            )
        })
        .ok();

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
            name,
            email,
            message,
        }),
        _ => Err(errors),
    }
}

fn length_violation(label: &str, value: &str, bounds: RangeInclusive<usize>) -> String {
    if value.chars().count() < *bounds.start() {
        format!("{label} must be at least {} characters", bounds.start())
    } else {
        format!("{label} must be less than {} characters", bounds.end())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactForm {
        ContactForm {
            name: name.map(Into::into),
            email: email.map(Into::into),
            message: message.map(Into::into),
        }
    }

    #[test]
    fn valid() {
        let submission = validate(&form(
            Some("Al"),
            Some("al@example.com"),
            Some("Hello there, this is a test."),
        ))
        .unwrap();

        assert_eq!(*submission.name, "Al");
        assert_eq!(submission.email.as_str(), "al@example.com");
        assert_eq!(*submission.message, "Hello there, this is a test.");
    }

    #[test]
    fn collects_all_violations() {
        let errors = validate(&form(Some("A"), Some("bad-email"), Some("hi"))).unwrap_err();

        assert_eq!(errors.get(ContactField::Name), ["Name must be at least 2 characters"]);
        assert_eq!(errors.get(ContactField::Email), [INVALID_EMAIL]);
        assert_eq!(
            errors.get(ContactField::Message),
            ["Message must be at least 10 characters"]
        );
    }

    #[test]
    fn missing_fields_are_empty() {
        let errors = validate(&ContactForm::default()).unwrap_err();

        assert_eq!(errors.first(ContactField::Name), Some("Name must be at least 2 characters"));
        assert_eq!(errors.first(ContactField::Email), Some(INVALID_EMAIL));
        assert_eq!(
            errors.first(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn rejects_unusual_addresses() {
        for email in [
            "al@localhost",
            "al@example.c",
            "\"a b\"@example.com",
            "al@[127.0.0.1]",
            "al@exämple.com",
            "al..bo@example.com",
        ] {
            let errors = validate(&form(
                Some("Al"),
                Some(email),
                Some("Hello there, this is a test."),
            ))
            .unwrap_err();

            assert_eq!(errors.get(ContactField::Email), [INVALID_EMAIL], "{email:?}");
            assert!(!errors.contains(ContactField::Name));
            assert!(!errors.contains(ContactField::Message));
        }
    }

    #[test]
    fn too_long() {
        let long_message = "m".repeat(1001);
        let errors = validate(&form(
            Some(&"n".repeat(51)),
            Some("al@example.com"),
            Some(&long_message),
        ))
        .unwrap_err();

        assert_eq!(errors.get(ContactField::Name), ["Name must be less than 50 characters"]);
        assert!(!errors.contains(ContactField::Email));
        assert_eq!(
            errors.get(ContactField::Message),
            ["Message must be less than 1000 characters"]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        for (name, message) in [
            ("ab".to_owned(), "m".repeat(10)),
            ("n".repeat(50), "m".repeat(1000)),
            ("ñé".to_owned(), "ü".repeat(1000)),
        ] {
            let result = validate(&form(Some(&name), Some("al@example.com"), Some(&message)));
            assert!(result.is_ok(), "{name:?} / {} chars", message.chars().count());
        }
    }
}
