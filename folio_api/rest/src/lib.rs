use std::net::IpAddr;

use anyhow::Context;
use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_health_contracts::HealthFeatureService;
use folio_di::Build;
use folio_models::email_address::EmailAddress;
use tokio::net::TcpListener;
use tracing::info;

mod extractors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    config: RestServerConfig,
    health: Health,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Offered to visitors whose contact request cannot be read.
    pub contact_fallback: EmailAddress,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port, .. } = self.config;

        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Listening on http://{host}:{port}");

        axum::serve(listener, self.router())
            .await
            .context("Failed to start HTTP server")
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(
                self.contact.into(),
                self.config.contact_fallback,
            ))
            .fallback(routes::not_found);

        // layers added last run first
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
