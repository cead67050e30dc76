// src/github/event.rs
// =============================================================================
// The shape of one entry in the GitHub Events API feed.
//
// Only the fields we summarize are modeled. Everything else in the JSON
// (actor, id, public, org...) is ignored by serde.
//
// The payload is kept as an untyped serde_json::Value because its shape
// depends on `type`. The classifier turns it into typed data later.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One activity record from `/users/{user}/events`
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Discriminator such as "PushEvent" or "WatchEvent"
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Repo,
    /// e.g. "2024-05-01T12:00:00Z"
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// "owner/name"
    pub name: String,
}

#[cfg(test)]
impl Event {
    pub fn new(kind: &str, repo: &str, created_at: DateTime<Utc>, payload: Value) -> Self {
        Event {
            kind: kind.to_string(),
            repo: Repo {
                name: repo.to_string(),
            },
            created_at,
            payload,
        }
    }
}
