use std::{ops::Deref, sync::LazyLock};

use tracing::error;

use crate::folio_version;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let version = folio_version();

    format!("Folio ({homepage}, Version {version})")
});

/// Shared [`reqwest::Client`] which identifies itself with [`USER_AGENT`].
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                error!("Failed to build http client, falling back to defaults: {err}");
                reqwest::Client::new()
            });
        Self(client)
    }
}
