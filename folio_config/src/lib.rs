use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
pub use duration::Duration;
use folio_models::email_address::{EmailAddress, EmailAddressWithName};
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order after the
/// default config.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Prefix of environment variables overriding single values, e.g.
/// `FOLIO__EMAIL__API_KEY`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Load the default config, the files listed in [`CONFIG_PATH_ENV`] and any
/// `FOLIO__*` environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(extra) = std::env::var(CONFIG_PATH_ENV) {
        paths.extend(
            extra
                .split(':')
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        );
    }

    build(&paths, &[], true)
}

/// Load only the given files followed by inline TOML snippets, ignoring the
/// environment.
pub fn load_with_override(paths: &[impl AsRef<Path>], overrides: &[&str]) -> anyhow::Result<Config> {
    build(paths, overrides, false)
}

fn build(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
    with_env: bool,
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?;

    let builder = overrides.iter().fold(builder, |builder, snippet| {
        builder.add_source(File::from_str(snippet, FileFormat::Toml))
    });

    let builder = if with_env {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
    } else {
        builder
    };

    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_database_port")]
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub dbname: String,
}

fn default_database_port() -> u16 {
    5432
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("dbname", &self.dbname)
            .finish()
    }
}

#[derive(Deserialize)]
pub struct EmailConfig {
    pub api_url: Url,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Recipient of contact notifications.
    pub owner: EmailAddressWithName,
    pub notification_sender: EmailAddressWithName,
    pub confirmation_sender: EmailAddressWithName,
    /// Address shown to visitors when automated delivery fails. Defaults to
    /// the owner's address.
    pub fallback: Option<EmailAddress>,
    /// Signature lines at the end of the confirmation email.
    pub signature: Vec<String>,
    pub profile_url: Option<Url>,
}

impl ContactConfig {
    pub fn fallback_address(&self) -> EmailAddress {
        self.fallback.clone().unwrap_or_else(|| self.owner.email())
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}
