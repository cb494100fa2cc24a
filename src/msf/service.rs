//! Entry point for calling MySportsFeeds endpoints.

use crate::{
    config::Config,
    core::retry::{RetryPolicy, RetryingClient},
    Result,
};

/// Configuration plus the retrying client every endpoint call uses.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Service {
    pub config: Config,
    client: RetryingClient,
}

impl Service {
    /// Service with the default retry policy.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_retry_policy(config, RetryPolicy::default())
    }

    pub fn with_retry_policy(config: Config, policy: RetryPolicy) -> Result<Self> {
        Ok(Self {
            config,
            client: RetryingClient::new(policy)?,
        })
    }

    pub fn client(&self) -> &RetryingClient {
        &self.client
    }
}
