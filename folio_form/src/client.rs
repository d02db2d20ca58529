use anyhow::Context;
use folio_core_contact_contracts::ContactFeatureService;
use folio_models::{
    contact::{ContactForm, SubmissionResult},
    email_address::EmailAddress,
};
use folio_utils::http::HttpClient;
use tracing::{debug, error};
use url::Url;

/// Submits contact forms to a running folio server.
#[derive(Debug, Clone)]
pub struct HttpContactClient {
    client: HttpClient,
    endpoint: Url,
    /// Offered to the visitor when the server cannot be reached.
    fallback: EmailAddress,
}

impl HttpContactClient {
    /// `base_url` is the root of the folio http api.
    pub fn new(base_url: &Url, fallback: EmailAddress) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join("contact")
            .with_context(|| format!("Failed to build contact endpoint from {base_url}"))?;

        Ok(Self {
            client: HttpClient::default(),
            endpoint,
            fallback,
        })
    }

    async fn post(&self, form: &ContactForm) -> anyhow::Result<SubmissionResult> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await
            .context("Failed to send contact form")?;

        // error statuses still carry a SubmissionResult body
        debug!(status = %response.status(), "received contact response");

        response
            .json()
            .await
            .context("Failed to decode contact response")
    }
}

impl ContactFeatureService for HttpContactClient {
    async fn submit(&self, form: ContactForm) -> SubmissionResult {
        self.post(&form).await.unwrap_or_else(|err| {
            error!("Failed to submit contact form: {err:#}");
            SubmissionResult::failure(transport_failure(&self.fallback))
        })
    }
}

fn transport_failure(fallback: &EmailAddress) -> String {
    format!(
        "Sorry, there was an error sending your message. Please try again later or contact me \
         directly at {fallback}"
    )
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use axum::{http::StatusCode, routing, Json, Router};
    use folio_models::contact::{ContactField, FieldErrors};
    use pretty_assertions::assert_eq;
    use tokio::net::TcpListener;

    use super::*;

    const FALLBACK: &str = "hello@example.org";

    async fn serve(router: Router) -> Url {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });
        format!("http://{addr}/").parse().unwrap()
    }

    #[tokio::test]
    async fn decodes_error_status() {
        // Arrange
        let mut errors = FieldErrors::default();
        errors.push(ContactField::Email, "Please enter a valid email address");
        let expected = SubmissionResult::invalid("Please fix the errors below.", errors);

        let response = expected.clone();
        let router = Router::new().route(
            "/contact",
            routing::post(move |Json(form): Json<ContactForm>| async move {
                assert_eq!(form.email.as_deref(), Some("bad"));
                (StatusCode::UNPROCESSABLE_ENTITY, Json(response))
            }),
        );
        let sut = HttpContactClient::new(&serve(router).await, FALLBACK.parse().unwrap()).unwrap();

        // Act
        let result = sut
            .submit(ContactForm {
                name: Some("Al".into()),
                email: Some("bad".into()),
                message: Some("Hello there, this is a test.".into()),
            })
            .await;

        // Assert
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn undecodable_response() {
        // Arrange
        let router = Router::new().route("/contact", routing::post(|| async { "not json" }));
        let sut = HttpContactClient::new(&serve(router).await, FALLBACK.parse().unwrap()).unwrap();

        // Act
        let result = sut.submit(ContactForm::default()).await;

        // Assert
        assert_eq!(
            result,
            SubmissionResult::failure(
                "Sorry, there was an error sending your message. Please try again later or \
                 contact me directly at hello@example.org"
            )
        );
    }

    #[tokio::test]
    async fn unreachable() {
        // Arrange
        let sut = HttpContactClient::new(
            &"http://127.0.0.1:9/".parse().unwrap(),
            FALLBACK.parse().unwrap(),
        )
        .unwrap();

        // Act
        let result = sut.submit(ContactForm::default()).await;

        // Assert
        assert_eq!(
            result,
            SubmissionResult::failure(
                "Sorry, there was an error sending your message. Please try again later or \
                 contact me directly at hello@example.org"
            )
        );
    }
}
