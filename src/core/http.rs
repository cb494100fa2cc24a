//! HTTP utilities for MySportsFeeds API communication

use crate::Result;
use chrono::Local;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Compression preference sent as the first `Authorization` value.
pub const COMPRESSION_HEADER_GZIP: &str = "gzip";

/// `YYYYMMDDHHMMSS`
const CACHE_BUSTER_FORMAT: &str = "%Y%m%d%H%M%S";

/// Build the `Authorization` headers for a request.
///
/// Both the compression token and the credential are appended to the same
/// header name, so the request carries two `Authorization` lines.
pub fn authorization_header_map(credential: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.append(
        AUTHORIZATION,
        HeaderValue::from_static(COMPRESSION_HEADER_GZIP),
    );
    h.append(AUTHORIZATION, HeaderValue::from_str(credential)?);
    Ok(h)
}

/// Current local time as a 14 digit token, so intermediary caches never
/// serve a previous response.
pub fn cache_buster() -> String {
    Local::now().format(CACHE_BUSTER_FORMAT).to_string()
}
