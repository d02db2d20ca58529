use folio_di::Build;
use folio_email_contracts::{
    template::TemplateEmailService, Email, EmailReceipt, EmailSendError, EmailService,
};
use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{
    ContactConfirmationTemplate, ContactNotificationTemplate, Template, TemplateService,
};

#[derive(Debug, Clone, Build)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, Template> TemplateEmailService for TemplateEmailServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_contact_notification(
        &self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> Result<EmailReceipt, EmailSendError> {
        let subject = format!("New Portfolio Contact from {}", data.name);
        self.send_email(from, recipient, Some(reply_to), data, subject)
            .await
    }

    async fn send_contact_confirmation(
        &self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> Result<EmailReceipt, EmailSendError> {
        self.send_email(from, recipient, None, data, "Thank you for contacting me!")
            .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        subject: impl Into<String>,
    ) -> Result<EmailReceipt, EmailSendError> {
        let body = self.template.render(data)?;
        self.email
            .send(Email {
                from,
                recipient,
                reply_to,
                subject: subject.into(),
                html: Some(body.html),
                text: body.text,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use folio_email_contracts::MockEmailService;
    use folio_templates_contracts::{MockTemplateService, RenderedTemplate};
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn contact_notification() {
        // Arrange
        let data = ContactNotificationTemplate {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "Hello there, nice portfolio!".into(),
        };
        let rendered = RenderedTemplate {
            html: "<p>html</p>".into(),
            text: "text".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), rendered);
        let email = MockEmailService::new().with_send(
            Email {
                from: from(),
                recipient: owner(),
                reply_to: Some(visitor()),
                subject: "New Portfolio Contact from Ada Lovelace".into(),
                html: Some("<p>html</p>".into()),
                text: "text".into(),
            },
            "email-1",
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification(from(), owner(), visitor(), &data)
            .await;

        // Assert
        assert_eq!(result.unwrap(), EmailReceipt { id: "email-1".into() });
    }

    #[tokio::test]
    async fn contact_confirmation_has_no_reply_to() {
        // Arrange
        let data = ContactConfirmationTemplate {
            name: "Ada Lovelace".into(),
            excerpt: "Hello there...".into(),
            profile_url: None,
            signature: vec!["Mael".into()],
        };
        let rendered = RenderedTemplate {
            html: "<p>thanks</p>".into(),
            text: "thanks".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), rendered);
        let email = MockEmailService::new().with_send_error(
            Email {
                from: from(),
                recipient: visitor(),
                reply_to: None,
                subject: "Thank you for contacting me!".into(),
                html: Some("<p>thanks</p>".into()),
                text: "thanks".into(),
            },
            EmailSendError::MissingApiKey,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_confirmation(from(), visitor(), &data)
            .await;

        // Assert
        assert_matches!(result, Err(EmailSendError::MissingApiKey));
    }

    fn from() -> EmailAddressWithName {
        "Portfolio Contact <onboarding@resend.dev>".parse().unwrap()
    }

    fn owner() -> EmailAddressWithName {
        "owner@example.com".parse().unwrap()
    }

    fn visitor() -> EmailAddressWithName {
        "ada@example.com".parse().unwrap()
    }
}
