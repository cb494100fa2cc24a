//! Error types for the MySportsFeeds gamelogs client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MsfError>;

#[derive(Error, Debug)]
pub enum MsfError {
    #[error("Missing required option to build the url: {field}")]
    MissingOption { field: &'static str },

    #[error("Could not create request: {0}")]
    ClientRequest(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request failed with status code {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to read response body (status {status}): {source}")]
    Body {
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {kind}: {value}")]
    InvalidArgument { kind: &'static str, value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl MsfError {
    /// HTTP status associated with the failure, or 0 when no response was received.
    pub fn status_code(&self) -> u16 {
        match self {
            MsfError::HttpStatus { status }
            | MsfError::Body { status, .. }
            | MsfError::Decode { status, .. } => *status,
            _ => 0,
        }
    }
}
