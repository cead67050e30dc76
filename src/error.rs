// src/error.rs
// =============================================================================
// Typed errors for fetching a user's event feed.
//
// The rest of the app uses anyhow::Result, but the fetcher returns this enum
// so the caller can tell an HTTP 404 from a timeout and report each one as a
// single user-facing line.
//
// Rust concepts:
// - thiserror: derive Display and std::error::Error from attributes
// - #[source]: chains the underlying error so `{:#}` / logs can show it
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Username was empty or only whitespace
    #[error("username must not be empty")]
    InvalidUsername,

    /// The configured API base could not be turned into an events URL
    #[error("invalid API base URL '{base}': {source}")]
    InvalidBaseUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client itself could not be built (TLS backend, etc.)
    #[error("could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS, TLS or timeout failure
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Server answered with something other than 200
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// 200 response whose body is not a JSON event array
    #[error("could not decode event feed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// HTTP status code, when the failure was a non-200 response
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}
