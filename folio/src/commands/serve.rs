use folio_config::Config;
use folio_di::Provides;
use folio_email_contracts::EmailService;
use folio_persistence_contracts::Database;
use tracing::{info, warn};

use crate::{
    database,
    environment::{
        types::{Email, RestServer},
        ConfigProvider, Provider,
    },
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database);
    database.ping().await?;

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, database);

    info!("Checking email provider");
    let email: Email = provider.provide();
    if let Err(err) = email.ping().await {
        warn!("Email provider is unreachable, notifications will fail: {err:#}");
    }

    let server: RestServer = provider.provide();
    server.serve().await
}
