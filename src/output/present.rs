// src/output/present.rs
// =============================================================================
// Writes the final report.
//
// Three possible outcomes, each printed to the same writer:
// - events found: intro line, formatted lines, a short footer
// - empty feed:   exactly one "No recent events" line
// - fetch failed: exactly one "Error fetching events" line
//
// Functions take `impl Write` instead of printing directly so tests can
// capture the output in a Vec<u8>.
// =============================================================================

use std::io::{self, Write};

use crate::activity::EventSummary;
use crate::error::FetchError;

use super::{format_summary, Theme};

/// Prints the digest (or the empty-feed notice) for `username`
pub fn present_summary<W: Write>(
    out: &mut W,
    username: &str,
    summary: &EventSummary,
    theme: &Theme,
) -> io::Result<()> {
    if summary.is_empty() {
        let notice = format!("No recent events for {}.", username);
        writeln!(out, "{}", theme.notice.apply_to(notice))?;
        return Ok(());
    }

    writeln!(out, "Latest events for {}:", theme.user.apply_to(username))?;

    for line in format_summary(summary, theme) {
        writeln!(out, "{}", line)?;
    }

    let repos = summary.repos().len();
    writeln!(
        out,
        "📊 {} event(s) across {} {}",
        summary.event_count(),
        repos,
        if repos == 1 { "repository" } else { "repositories" }
    )?;

    Ok(())
}

/// Prints a single line describing why the feed couldn't be fetched
pub fn present_error<W: Write>(
    out: &mut W,
    username: &str,
    error: &FetchError,
    theme: &Theme,
) -> io::Result<()> {
    let message = format!("Error fetching events for {}: {}", username, error);
    writeln!(out, "{}", theme.error.apply_to(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::summarize;
    use crate::github::Event;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_feed_prints_one_notice() {
        let summary = summarize(&[], Utc::now());
        let text = render(|out| present_summary(out, "quiet", &summary, &Theme::plain()));
        assert_eq!(text, "No recent events for quiet.\n");
    }

    #[test]
    fn test_summary_has_intro_and_footer() {
        let now = Utc::now();
        let events = vec![
            Event::new("WatchEvent", "rust-lang/rust", now - Duration::seconds(5), json!({})),
            Event::new("ForkEvent", "tokio-rs/tokio", now - Duration::seconds(5), json!({})),
        ];
        let summary = summarize(&events, now);
        let text = render(|out| present_summary(out, "octocat", &summary, &Theme::plain()));

        assert_eq!(
            text,
            "Latest events for octocat:\n\
             rust-lang/rust (1 event(s))\n  ⭐ starred the repository [5s ago]\n\
             tokio-rs/tokio (1 event(s))\n  🍴 forked the repository [5s ago]\n\
             📊 2 event(s) across 2 repositories\n"
        );
    }

    #[test]
    fn test_http_error_is_one_line_with_status() {
        let error = FetchError::HttpStatus { status: 404 };
        let text = render(|out| present_error(out, "nobody", &error, &Theme::plain()));

        assert_eq!(text.lines().count(), 1);
        assert_eq!(text, "Error fetching events for nobody: HTTP 404\n");
    }
}
