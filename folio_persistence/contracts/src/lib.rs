use std::future::Future;

pub mod contact;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Database: Send + Sync + 'static {
    /// Verify that a connection to the database can be established.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockDatabase {
    pub fn with_ping(mut self, result: Result<(), &'static str>) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(result.map_err(anyhow::Error::msg)))
        });
        self
    }
}
