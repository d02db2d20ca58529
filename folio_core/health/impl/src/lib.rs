use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use folio_di::Build;
use folio_email_contracts::EmailService;
use folio_persistence_contracts::Database;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Db, Email> {
    db: Db,
    email: Email,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Db, Email> HealthFeatureService for HealthFeatureServiceImpl<Db, Email>
where
    Db: Database,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let fresh = |cached: &&CachedStatus| cached.timestamp.elapsed() < self.config.cache_ttl;

        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(fresh) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(fresh) {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err:#}"))
            .is_ok();

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping email provider: {err:#}"))
            .is_ok();

        let status = HealthStatus { database, email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: Instant::now(),
            })
            .status
    }
}
