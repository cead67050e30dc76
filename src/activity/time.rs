// src/activity/time.rs
// =============================================================================
// Converts an absolute timestamp into a coarse "how long ago" string.
//
// Buckets (lower bound inclusive, upper bound exclusive):
//   age < 60s      -> "45s ago"
//   age < 1 hour   -> "2m ago"
//   age < 1 day    -> "2h ago"
//   otherwise      -> "2d ago"
//
// Division truncates, so 125 seconds is "2m ago", not "3m ago".
// =============================================================================

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Relative age of `at`, measured from `now`
///
/// `now` is passed in rather than read from the clock so the caller decides
/// the reference instant (and tests stay deterministic). Timestamps in the
/// future are treated as "0s ago".
pub fn relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds().max(0);
    format_age(seconds)
}

fn format_age(seconds: i64) -> String {
    if seconds < MINUTE {
        format!("{}s ago", seconds)
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else {
        format!("{}d ago", seconds / DAY)
    }
}
