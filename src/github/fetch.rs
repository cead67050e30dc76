// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub API.
//
// Strategy:
// - Build `{api_base}/users/{username}/events` with the url crate
// - Issue ONE GET request with a bounded timeout
// - 200 => decode the body as a JSON array of events
// - anything else => a typed FetchError the caller can report
//
// What we deliberately don't do:
// - No authentication, so requests are rate-limited by GitHub
// - No pagination, so only the first page (~30 most recent events) is used
// - No retries
//
// Rust concepts:
// - Traits: EventSource lets tests swap the real client for a stub
// - async-trait: async fn in a trait, boxed behind the scenes
// - map_err: turn a library error into our own error variant
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use super::Event;
use crate::error::FetchError;

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects API requests that carry no User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce a user's event feed
#[async_trait]
pub trait EventSource {
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError>;
}

/// EventSource backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
}

impl GithubClient {
    // Creates a client for the given API root
    //
    // Parameters:
    //   api_base: usually DEFAULT_API_URL; tests point it at a mock server
    //   timeout: upper bound for the whole request (connect + body)
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let parsed = Url::parse(api_base).map_err(|source| FetchError::InvalidBaseUrl {
            base: api_base.to_string(),
            source,
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            api_base: parsed,
        })
    }

    // Builds the events endpoint for a user
    //
    // Example:
    //   base "https://api.github.com", user "octocat"
    //   -> "https://api.github.com/users/octocat/events"
    //
    // The username is pushed as a path segment, so it gets percent-encoded
    // and can't escape into other parts of the path.
    fn events_url(&self, username: &str) -> Result<Url, FetchError> {
        let mut url = self.api_base.clone();

        // Only "cannot-be-a-base" URLs (e.g. "mailto:x") have no path segments
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl {
                base: self.api_base.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .extend(["users", username, "events"]);

        Ok(url)
    }
}

#[async_trait]
impl EventSource for GithubClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::InvalidUsername);
        }

        let url = self.events_url(username)?;
        info!(%url, "fetching events");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        // Only 200 carries an event array; 3xx/4xx/5xx are all reported as-is
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // Read the body first so a slow body still counts as a network failure,
        // and a bad body shows up as a decode failure
        let body = response.text().await.map_err(FetchError::Network)?;
        let events = decode_events(&body)?;

        debug!(count = events.len(), "decoded events");
        Ok(events)
    }
}

// Decodes the feed one element at a time
//
// The body must be a JSON array, otherwise the whole feed is a Decode error.
// A single element with a broken envelope (no repo, bad created_at) is
// logged and skipped so the rest of the feed is still reported.
fn decode_events(body: &str) -> Result<Vec<Event>, FetchError> {
    let raw: Vec<Value> = serde_json::from_str(body).map_err(FetchError::Decode)?;

    let events = raw
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value::<Event>(value) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(position, error = %e, "skipping malformed event");
                None
            }
        })
        .collect();

    Ok(events)
}
