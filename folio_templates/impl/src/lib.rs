use std::sync::Arc;

use anyhow::anyhow;
use folio_di::Build;
use folio_templates_contracts::{
    RenderedTemplate, Template, TemplateService, BASE_TEMPLATE, TEMPLATES,
};
use tera::Tera;

#[derive(Debug, Clone, Build)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<tera::Result<Tera>>);

impl Default for State {
    fn default() -> Self {
        Self(Arc::new(load_templates()))
    }
}

// Template names carry their extension so that tera autoescapes the html
// variants but not the plain text ones.
fn load_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template("base.html", BASE_TEMPLATE)?;
    for &(name, html, text) in TEMPLATES {
        tera.add_raw_template(&format!("{name}.html"), html)?;
        tera.add_raw_template(&format!("{name}.txt"), text)?;
    }

    Ok(tera)
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<RenderedTemplate> {
        let tera = match &*self.state.0 {
            Ok(tera) => tera,
            Err(err) => return Err(anyhow!("Failed to load email templates: {err}")),
        };

        let context = tera::Context::from_serialize(template)?;

        Ok(RenderedTemplate {
            html: tera.render(&format!("{}.html", T::NAME), &context)?,
            text: tera.render(&format!("{}.txt", T::NAME), &context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut() -> TemplateServiceImpl {
        TemplateServiceImpl {
            state: Default::default(),
        }
    }

    #[test]
    fn contact_notification() {
        // Act
        let result = sut()
            .render(&ContactNotificationTemplate {
                name: "Al".into(),
                email: "al@example.com".into(),
                message: "Hello there,\nthis is a test.".into(),
            })
            .unwrap();

        // Assert
        assert!(result.html.contains("<strong>Name:</strong> Al"));
        assert!(result.html.contains("Hello there,<br>this is a test."));
        assert!(result.text.contains("Message:\nHello there,\nthis is a test."));
        assert!(result.text.starts_with("New Portfolio Contact from Al"));
    }

    #[test]
    fn contact_notification_escapes_html() {
        // Act
        let result = sut()
            .render(&ContactNotificationTemplate {
                name: "<b>Al</b>".into(),
                email: "al@example.com".into(),
                message: "<script>alert(1)</script>\nbye".into(),
            })
            .unwrap();

        // Assert
        assert!(!result.html.contains("<script>"));
        assert!(!result.html.contains("<b>Al</b>"));
        assert!(result.html.contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;<br>bye"));
        assert!(result.text.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn contact_confirmation() {
        // Act
        let result = sut()
            .render(&ContactConfirmationTemplate {
                name: "Al".into(),
                excerpt: "Hello there, this is a test.".into(),
                profile_url: Some("https://github.com/KimADR".into()),
                signature: vec!["Mael Andria".into(), "Full-Stack Developer".into()],
            })
            .unwrap();

        // Assert
        assert!(result.html.contains("Hi Al,"));
        assert!(result.html.contains("\"Hello there, this is a test.\""));
        assert!(result.html.contains("href=\"https:&#x2F;&#x2F;github.com&#x2F;KimADR\""));
        assert!(result
            .html
            .contains("Best regards,<br><strong>Mael Andria</strong><br>Full-Stack Developer"));
        assert_eq!(
            result.text.lines().filter(|l| *l == "Mael Andria").count(),
            1
        );
    }

    #[test]
    fn contact_confirmation_without_profile() {
        // Act
        let result = sut()
            .render(&ContactConfirmationTemplate {
                name: "Al".into(),
                excerpt: "Hello there, this is a test.".into(),
                profile_url: None,
                signature: vec![],
            })
            .unwrap();

        // Assert
        assert!(!result.html.contains("check out my projects"));
        assert!(!result.text.contains("check out my projects"));
    }
}
