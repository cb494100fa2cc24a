//! Retrying HTTP client.
//!
//! Wraps a `reqwest::Client` and re-sends a request with exponential backoff
//! when the connection fails or the server answers 429 or a 5xx (other than
//! 501). Once retries run out the last response or error is handed back
//! unchanged, so callers still classify the status themselves.

use reqwest::{Client, Request, Response, StatusCode};
use std::time::Duration;
use tracing::warn;

use crate::error::{MsfError, Result};

/// Per-attempt timeout for the underlying client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    pub min_wait: Duration,
    pub max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            min_wait: Duration::from_secs(1),
            max_wait: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Wait before retry number `attempt + 1`: `min_wait * 2^attempt`, capped at `max_wait`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.min_wait.saturating_mul(factor).min(self.max_wait)
    }
}

/// Statuses worth another attempt.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
}

/// Transport failures worth another attempt.
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_request()
}

#[derive(Debug, Clone)]
pub struct RetryingClient {
    client: Client,
    policy: RetryPolicy,
}

impl RetryingClient {
    pub fn new(policy: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("msf-gamelogs/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(MsfError::ClientRequest)?;
        Ok(Self::with_client(client, policy))
    }

    pub fn with_client(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Underlying client, for building requests.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Send `request`, retrying transient failures according to the policy.
    pub async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        let mut attempt = 0;
        loop {
            // Streaming bodies can't be replayed; send those once
            let Some(current) = request.try_clone() else {
                return self.client.execute(request).await;
            };

            let result = self.client.execute(current).await;
            let retryable = match &result {
                Ok(response) => is_retryable_status(response.status()),
                Err(e) => is_retryable_error(e),
            };
            if !retryable || attempt >= self.policy.max_retries {
                return result;
            }

            let delay = self.policy.backoff(attempt);
            match &result {
                Ok(response) => warn!(
                    url = %request.url(),
                    status = response.status().as_u16(),
                    retry = attempt + 1,
                    ?delay,
                    "retrying request"
                ),
                Err(e) => warn!(
                    url = %request.url(),
                    error = %e,
                    retry = attempt + 1,
                    ?delay,
                    "retrying request"
                ),
            }
            drop(result);

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}
