use folio_config::EmailConfig;
use folio_email_impl::{EmailServiceConfig, EmailServiceImpl};
use tracing::warn;

pub fn service_config(config: &EmailConfig) -> EmailServiceConfig {
    if config.api_key.is_none() {
        warn!("No email api key configured, contact messages will be stored but not delivered");
    }

    EmailServiceConfig {
        api_url: config.api_url.clone(),
        api_key: config.api_key.clone(),
    }
}

pub fn connect(config: &EmailConfig) -> EmailServiceImpl {
    EmailServiceImpl::new(service_config(config))
}
