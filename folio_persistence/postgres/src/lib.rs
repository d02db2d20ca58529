use std::sync::Arc;

use anyhow::{anyhow, Context};
use folio_persistence_contracts::Database;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};
use tracing::{trace, warn};

pub mod contact;

/// Handle to a PostgreSQL database.
///
/// Connections are not pooled: every operation opens its own connection and
/// closes it again before returning.
#[derive(Debug, Clone)]
pub struct PostgresDatabase {
    config: Arc<tokio_postgres::Config>,
}

#[derive(Debug, Clone)]
pub struct PostgresDatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub dbname: String,
}

impl PostgresDatabase {
    pub fn new(config: &PostgresDatabaseConfig) -> Self {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&config.host)
            .port(config.port)
            .user(&config.user)
            .dbname(&config.dbname)
            .application_name("folio");
        if let Some(password) = &config.password {
            pg_config.password(password);
        }

        Self {
            config: pg_config.into(),
        }
    }

    /// Open a new connection. Call [`PgConnection::close`] when done.
    pub async fn connect(&self) -> anyhow::Result<PgConnection> {
        trace!("open database connection");

        let (client, connection) = self
            .config
            .connect(NoTls)
            .await
            .context("Failed to connect to database")?;

        let task = tokio::spawn(async move {
            if let Err(err) = connection.await {
                warn!("database connection terminated with error: {err}");
            }
        });

        Ok(PgConnection { client, task })
    }

    /// Run one or more statements on a fresh connection.
    pub async fn execute(&self, query: &str) -> anyhow::Result<()> {
        let conn = self.connect().await?;
        let result = conn
            .client()
            .batch_execute(query)
            .await
            .context("Failed to execute query");
        conn.close().await;
        result
    }
}

impl Database for PostgresDatabase {
    async fn ping(&self) -> anyhow::Result<()> {
        let conn = self.connect().await?;
        let result = conn
            .client()
            .query_one("select 1", &[])
            .await
            .map_err(Into::into)
            .map(|row| row.get(0))
            .and_then(|res: i32| {
                (res == 1)
                    .then_some(())
                    .ok_or_else(|| anyhow!("Expected a result of 1, got {res} instead"))
            })
            .context("Failed to ping database");
        conn.close().await;
        result
    }
}

/// A single open database connection.
pub struct PgConnection {
    client: Client,
    task: JoinHandle<()>,
}

impl PgConnection {
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Terminate the connection and wait for its background task to finish.
    pub async fn close(self) {
        trace!("close database connection");

        drop(self.client);
        if let Err(err) = self.task.await {
            warn!("database connection task failed: {err}");
        }
    }
}
