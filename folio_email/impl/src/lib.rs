use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_email_contracts::{Email, EmailReceipt, EmailSendError, EmailService};
use folio_utils::{http::HttpClient, Apply};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

pub mod template;

/// Delivers emails through the Resend http api.
#[derive(Debug, Clone, Build)]
pub struct EmailServiceImpl {
    config: Arc<EmailServiceConfig>,
    #[state]
    client: HttpClient,
}

#[derive(Clone)]
pub struct EmailServiceConfig {
    /// Base url of the api. Must end with a slash.
    pub api_url: Url,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for EmailServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailServiceConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> Self {
        Self {
            config: config.into(),
            client: Default::default(),
        }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<EmailReceipt, EmailSendError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EmailSendError::MissingApiKey)?;

        let url = self
            .config
            .api_url
            .join("emails")
            .context("Failed to build send endpoint url")?;

        let from = email.from.to_string();
        let to = [email.recipient.to_string()];
        let reply_to = email.reply_to.as_ref().map(ToString::to_string);
        let request = SendEmailRequest {
            from: &from,
            to: &to,
            reply_to: reply_to.as_deref(),
            subject: &email.subject,
            html: email.html.as_deref(),
            text: &email.text,
        };

        trace!(?url, to = ?request.to, subject = request.subject, "send email");

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| EmailSendError::Transport(err.into()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|err| err.name.apply_map(err.message, |name, msg| name + ": " + &msg))
                .unwrap_or_else(|| status.to_string());
            debug!(%status, reason = %message, "email provider rejected email");
            return Err(EmailSendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let SendEmailResponse { id } = response
            .json()
            .await
            .context("Failed to parse email provider response")
            .map_err(EmailSendError::Transport)?;

        Ok(EmailReceipt { id })
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.client
            .get(self.config.api_url.clone())
            .send()
            .await
            .map(|_| ())
            .context("Failed to reach the email provider")
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    name: String,
    #[serde(default)]
    message: Option<String>,
}
