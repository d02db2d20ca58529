use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render both the html and the plain text variant of the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<RenderedTemplate>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: RenderedTemplate,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const HTML: &'static str;
    const TEXT: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub html: String,
    pub text: String,
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $name:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $name;
                const HTML: &'static str = include_str!(concat!("../templates/", $name, ".html"));
                const TEXT: &'static str = include_str!(concat!("../templates/", $name, ".txt"));
            }
        )*

        /// `(name, html, text)` of every template.
        pub const TEMPLATES: &[(&str, &str, &str)] = &[
            $( ($ident::NAME, $ident::HTML, $ident::TEXT) ),*
        ];
    };
}

templates! {
    ContactNotificationTemplate("contact_notification"),
    ContactConfirmationTemplate("contact_confirmation"),
}

/// Sent to the site owner for every accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactNotificationTemplate {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Sent to the visitor after the owner has been notified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactConfirmationTemplate {
    pub name: String,
    /// Beginning of the visitor's message, already shortened.
    pub excerpt: String,
    pub profile_url: Option<String>,
    pub signature: Vec<String>,
}
