// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's public events (one HTTP request)
// 3. Classify and group them by repository
// 4. Print the digest
// 5. Exit with proper code (0 = success, 1 = fetch failed, 2 = internal error)
//
// Rust concepts used:
// - async/await: the HTTP client is async, driven by a single-threaded runtime
// - Result<T, E>: for error handling (T = success type, E = error type)
// - Generics: report() works with any EventSource and any writer
// =============================================================================

// Module declarations - tells Rust about our other source files
mod activity;  // src/activity/ - classification and grouping
mod cli;       // src/cli.rs - command-line parsing
mod error;     // src/error.rs - fetch errors
mod github;    // src/github/ - GitHub API access
mod logging;   // src/logging.rs - tracing setup
mod output;    // src/output/ - terminal rendering

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::debug;

use cli::Cli;
use github::{EventSource, GithubClient};
use output::Theme;

// One request, one pass: the current-thread scheduler is all we need
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Something outside the fetch went wrong (e.g. stdout closed)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = digest (or empty-feed notice / usage hint) printed
//   Ok(1) = events could not be fetched; the reason was printed
//   Err = unexpected error
async fn run(cli: Cli) -> Result<i32> {
    let theme = Theme::detect(cli.colors_disabled());
    let mut stdout = io::stdout();

    let username = match cli.username.as_deref() {
        Some(name) => name,
        None => {
            print_usage_hint(&mut stdout)?;
            return Ok(0);
        }
    };

    let client = match GithubClient::new(&cli.api_url, Duration::from_secs(cli.timeout)) {
        Ok(client) => client,
        Err(e) => {
            output::present_error(&mut stdout, username, &e, &theme)?;
            return Ok(1);
        }
    };

    report(&client, username, &theme, &mut stdout).await
}

fn print_usage_hint<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Please provide a GitHub username, e.g. `gh-activity octocat`.")?;
    writeln!(out, "Run `gh-activity --help` for all options.")
}

// Fetches, summarizes and prints the events of one user
//
// Parameters:
//   source: where events come from (the GitHub API, or a stub in tests)
//   username: whose events to show
//   theme: colored or plain styles
//   out: where to write (stdout in the real program)
async fn report<S, W>(source: &S, username: &str, theme: &Theme, out: &mut W) -> Result<i32>
where
    S: EventSource + ?Sized,
    W: Write,
{
    let events = match source.fetch_events(username).await {
        Ok(events) => events,
        Err(e) => {
            debug!(status = ?e.status(), error = %e, "fetch failed");
            output::present_error(out, username, &e, theme)?;
            return Ok(1);
        }
    };

    // Ages are measured from the moment we summarize, not from process start
    let summary = activity::summarize(&events, Utc::now());
    output::present_summary(out, username, &summary, theme)?;

    Ok(0)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `report` generic over EventSource?
//    - The real program passes a GithubClient
//    - Tests pass a tiny stub that returns canned events or errors
//    - No network needed to test the whole fetch -> print pipeline
//
// 2. What does `?Sized` mean?
//    - By default generic types must have a known size at compile time
//    - `?Sized` relaxes that, so `&dyn EventSource` works too
//
// 3. Why write to `impl Write` instead of calling println!?
//    - A Vec<u8> is also a writer, so tests can capture the exact output
//
// 4. Why does a failed fetch return Ok(1) and not Err?
//    - A 404 or timeout is an expected outcome we report to the user
//    - Err is reserved for things that really shouldn't happen
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::github::Event;
    use async_trait::async_trait;
    use chrono::Duration as ChronoDuration;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    enum StubSource {
        Events(Vec<Event>),
        Status(u16),
    }

    #[async_trait]
    impl EventSource for StubSource {
        async fn fetch_events(&self, _username: &str) -> Result<Vec<Event>, FetchError> {
            match self {
                StubSource::Events(events) => Ok(events.clone()),
                StubSource::Status(status) => Err(FetchError::HttpStatus { status: *status }),
            }
        }
    }

    async fn run_report(source: StubSource, username: &str) -> (i32, String) {
        let mut buf = Vec::new();
        let code = report(&source, username, &Theme::plain(), &mut buf)
            .await
            .unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    // Far enough in the past that test runtime can't move it across a bucket
    fn days_ago(days: i64) -> chrono::DateTime<Utc> {
        Utc::now() - ChronoDuration::days(days) - ChronoDuration::hours(1)
    }

    #[tokio::test]
    async fn test_report_empty_feed() {
        let (code, text) = run_report(StubSource::Events(vec![]), "quiet").await;
        assert_eq!(code, 0);
        assert_eq!(text, "No recent events for quiet.\n");
    }

    #[tokio::test]
    async fn test_report_not_found() {
        let (code, text) = run_report(StubSource::Status(404), "nobody").await;
        assert_eq!(code, 1);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("404"));
    }

    #[tokio::test]
    async fn test_report_full_digest() {
        let events = vec![
            Event::new("PushEvent", "alice/a", days_ago(1), json!({"size": 3})),
            Event::new("WatchEvent", "bob/b", days_ago(1), json!({})),
            Event::new(
                "IssuesEvent",
                "alice/a",
                days_ago(2),
                json!({"action": "opened", "issue": {"number": 12}}),
            ),
            Event::new("PushEvent", "alice/a", days_ago(3), json!({"size": 2})),
            Event::new("Foo", "alice/a", days_ago(4), json!({})),
        ];

        let (code, text) = run_report(StubSource::Events(events), "alice").await;
        assert_eq!(code, 0);
        assert_eq!(
            text,
            "Latest events for alice:\n\
             alice/a (3 event(s))\n\
             \x20 📦 pushed 5 commit(s) [1d ago]\n\
             \x20 🐛 opened issue #12 [2d ago]\n\
             \x20 • Foo [4d ago]\n\
             bob/b (1 event(s))\n\
             \x20 ⭐ starred the repository [1d ago]\n\
             📊 5 event(s) across 2 repositories\n"
        );
    }

    #[test]
    fn test_usage_hint() {
        let mut buf = Vec::new();
        print_usage_hint(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Please provide a GitHub username"));
    }
}
