use std::sync::Arc;

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_core_health_impl::HealthFeatureConfig;
use folio_di::provider;
use folio_email_impl::EmailServiceConfig;
use types::Database;

use crate::email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        ..config: ConfigProvider {
            RestServerConfig,
            Arc<EmailServiceConfig>,
            Arc<ContactFeatureConfig>,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database) -> Self {
        Self {
            _state: Default::default(),
            database,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        rest_server_config: RestServerConfig,
        email_service_config: Arc<EmailServiceConfig>,
        contact_feature_config: Arc<ContactFeatureConfig>,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            contact_fallback: config.contact.fallback_address(),
        };

        let email_service_config = email::service_config(&config.email).into();

        let contact = &config.contact;
        let contact_feature_config = ContactFeatureConfig {
            owner: contact.owner.clone(),
            notification_sender: contact.notification_sender.clone(),
            confirmation_sender: contact.confirmation_sender.clone(),
            fallback: contact.fallback_address(),
            signature: contact.signature.clone(),
            profile_url: contact.profile_url.as_ref().map(ToString::to_string),
        }
        .into();

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: *config.health.cache_ttl,
        };

        Ok(Self {
            _state: Default::default(),
            rest_server_config,
            email_service_config,
            contact_feature_config,
            health_feature_config,
        })
    }
}
