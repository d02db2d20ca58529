use std::net::SocketAddr;

use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_form::{FormController, HttpContactClient, SubmitOutcome, TerminalNotifier};
use folio_models::contact::ContactField;
use url::Url;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Base url of the folio server [default: the configured http address]
    #[arg(long)]
    url: Option<Url>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    message: Option<String>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let url = match self.url {
            Some(url) => url,
            None => {
                let addr = SocketAddr::new(config.http.host, config.http.port);
                format!("http://{addr}/").parse()?
            }
        };

        let client = HttpContactClient::new(&url, config.contact.fallback_address())?;
        let mut form = FormController::new(client, TerminalNotifier);
        for (field, value) in [
            (ContactField::Name, self.name),
            (ContactField::Email, self.email),
            (ContactField::Message, self.message),
        ] {
            if let Some(value) = value {
                form.set(field, value);
            }
        }

        match form.submit().await {
            SubmitOutcome::Completed(true) => Ok(()),
            SubmitOutcome::Completed(false) => {
                for field in ContactField::ALL {
                    if let Some(error) = form.field_error(field) {
                        eprintln!("  {field}: {error}");
                    }
                }
                bail!("Contact form was not submitted")
            }
            SubmitOutcome::Ignored => bail!("A submission is already pending"),
        }
    }
}
