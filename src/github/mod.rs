// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The Event model for entries of the public events feed
// - Fetching `/users/{username}/events` (first page only, unauthenticated)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod event;
mod fetch;

// Re-export so callers can write `github::Event` and `github::GithubClient`
pub use event::Event;
pub use fetch::{EventSource, GithubClient, DEFAULT_API_URL};
