use clap::Subcommand;
use folio_config::Config;
use folio_email_contracts::{Email, EmailService};
use folio_models::email_address::EmailAddressWithName;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email);

    let receipt = email_service
        .send(Email {
            from: config.contact.notification_sender,
            recipient,
            reply_to: None,
            subject: "Email Deliverability Test".into(),
            html: None,
            text: "Email deliverability seems to be working!".into(),
        })
        .await?;

    println!("Email accepted with id {}", receipt.id);

    Ok(())
}
