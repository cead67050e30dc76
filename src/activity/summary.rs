// src/activity/summary.rs
// =============================================================================
// Groups classified events by repository.
//
// How it works:
// - summarize() folds over the events once, carrying an EventSummary
// - each repository gets a bucket the first time it's seen, so buckets keep
//   first-encountered order (the feed is newest-first)
// - inside a bucket, entries keep arrival order
// - push events are the exception: all pushes to one repository collapse
//   into a single entry whose commit count is the sum
//
// Rust concepts:
// - Iterator::fold: build a value from a sequence without outer mutable state
// - HashMap<String, usize>: name -> index into the ordered Vec of buckets
// =============================================================================

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::classify::{classify, Activity, EventKind};
use super::time::relative_age;
use crate::github::Event;

/// One descriptive line for a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub activity: Activity,
    /// e.g. "3h ago"
    pub age: String,
}

impl SummaryEntry {
    pub fn kind(&self) -> EventKind {
        self.activity.kind()
    }

    pub fn description(&self) -> String {
        self.activity.to_string()
    }
}

/// Everything that happened in one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoActivity {
    /// "owner/name"
    pub name: String,
    pub entries: Vec<SummaryEntry>,
}

/// Per-repository digest of an event feed
#[derive(Debug, Clone, Default)]
pub struct EventSummary {
    repos: Vec<RepoActivity>,
    index: HashMap<String, usize>,
    event_count: usize,
}

impl EventSummary {
    /// Buckets in first-encountered order
    pub fn repos(&self) -> &[RepoActivity] {
        &self.repos
    }

    /// Number of raw events that went into the summary
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    fn record(mut self, event: &Event, now: DateTime<Utc>) -> Self {
        self.event_count += 1;

        let activity = classify(event);
        let slot = match self.index.get(&event.repo.name) {
            Some(&slot) => slot,
            None => {
                self.repos.push(RepoActivity {
                    name: event.repo.name.clone(),
                    entries: Vec::new(),
                });
                let slot = self.repos.len() - 1;
                self.index.insert(event.repo.name.clone(), slot);
                slot
            }
        };
        let bucket = &mut self.repos[slot];

        // Fold later pushes into the first push entry for this repository
        if let Activity::Push { commits } = &activity {
            let existing = bucket.entries.iter_mut().find_map(|entry| match &mut entry.activity {
                Activity::Push { commits: total } => Some(total),
                _ => None,
            });
            if let Some(total) = existing {
                *total = total.saturating_add(*commits);
                return self;
            }
        }

        bucket.entries.push(SummaryEntry {
            activity,
            age: relative_age(event.created_at, now),
        });
        self
    }
}

/// Classifies and groups `events`, computing ages relative to `now`
pub fn summarize(events: &[Event], now: DateTime<Utc>) -> EventSummary {
    let summary = events
        .iter()
        .fold(EventSummary::default(), |summary, event| summary.record(event, now));

    debug!(
        events = summary.event_count(),
        repos = summary.repos().len(),
        "built summary"
    );
    summary
}
