// src/activity/mod.rs
// =============================================================================
// This module turns raw GitHub events into a per-repository digest.
//
// Submodules:
// - classify: maps each event's `type` tag to a typed Activity
// - summary: groups activities by repository (and sums push commits)
// - time: "45s ago" / "2m ago" / "2h ago" / "2d ago"
// =============================================================================

mod classify;
mod summary;
mod time;

pub use classify::EventKind;
pub use summary::{summarize, EventSummary};
