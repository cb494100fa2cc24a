//! Core HTTP plumbing shared by MySportsFeeds endpoints
//!
//! - `http`: request headers and the cache-busting token
//! - `retry`: the retrying HTTP client every request goes through

pub mod http;
pub mod retry;

// Re-export commonly used items for convenience
pub use http::{authorization_header_map, cache_buster, COMPRESSION_HEADER_GZIP};
pub use retry::{RetryPolicy, RetryingClient};
