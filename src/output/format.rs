// src/output/format.rs
// =============================================================================
// Turns an EventSummary into display lines.
//
// Layout:
//   owner/repo (2 event(s))
//     📦 pushed 5 commit(s) [1m ago]
//     🐛 opened issue #12 [3h ago]
//
// One header per repository (in first-encountered order), then one indented
// line per entry with an icon, the description and the bracketed age.
// =============================================================================

use crate::activity::{EventKind, EventSummary};

use super::Theme;

/// Generic icon for event types without their own
pub const DEFAULT_ICON: &str = "•";

/// Icon shown in front of each entry
pub fn icon_for(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Push => "📦",
        EventKind::IssueComment => "💬",
        EventKind::Issues => "🐛",
        EventKind::PullRequest => "🔀",
        EventKind::PullRequestReview => "👀",
        EventKind::PullRequestReviewComment => "💬",
        EventKind::Watch => "⭐",
        EventKind::Create => "✨",
        EventKind::Delete => "🗑",
        EventKind::Fork => "🍴",
        EventKind::Release => "🚀",
        EventKind::Other => DEFAULT_ICON,
    }
}

// Formats the summary as header + entry lines
//
// Parameters:
//   summary: grouped events
//   theme: styles for the repo name and the age
//
// Returns: lines without trailing newlines, in display order
pub fn format_summary(summary: &EventSummary, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();

    for repo in summary.repos() {
        lines.push(format!(
            "{} ({} event(s))",
            theme.repo.apply_to(&repo.name),
            repo.entries.len()
        ));

        for entry in &repo.entries {
            lines.push(format!(
                "  {} {} {}",
                icon_for(entry.kind()),
                entry.description(),
                theme.muted.apply_to(format!("[{}]", entry.age))
            ));
        }
    }

    lines
}
