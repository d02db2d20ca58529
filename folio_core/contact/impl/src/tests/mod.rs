use folio_email_contracts::template::MockTemplateEmailService;
use folio_models::{
    contact::{ContactForm, ContactSubmission},
    email_address::{EmailAddress, EmailAddressWithName},
};
use folio_persistence_contracts::contact::MockContactRepository;
use folio_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};

use crate::{ContactFeatureConfig, ContactFeatureServiceImpl};

mod excerpt;

type Sut = ContactFeatureServiceImpl<MockContactRepository, MockTemplateEmailService>;

const NAME: &str = "Al";
const EMAIL: &str = "al@example.com";
const MESSAGE: &str = "Hello there, this is a test.";

fn form() -> ContactForm {
    ContactForm {
        name: Some(NAME.into()),
        email: Some(EMAIL.into()),
        message: Some(MESSAGE.into()),
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: NAME.to_owned().try_into().unwrap(),
        email: EMAIL.parse().unwrap(),
        message: MESSAGE.to_owned().try_into().unwrap(),
    }
}

fn submitter() -> EmailAddressWithName {
    EMAIL.parse::<EmailAddress>().unwrap().with_name(NAME.into())
}

fn notification() -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: NAME.into(),
        email: EMAIL.into(),
        message: MESSAGE.into(),
    }
}

fn confirmation(config: &ContactFeatureConfig) -> ContactConfirmationTemplate {
    ContactConfirmationTemplate {
        name: NAME.into(),
        excerpt: MESSAGE.into(),
        profile_url: config.profile_url.clone(),
        signature: config.signature.clone(),
    }
}
