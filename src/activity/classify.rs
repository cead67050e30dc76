// src/activity/classify.rs
// =============================================================================
// Turns a raw GitHub event into a typed Activity.
//
// How it works:
// 1. EventKind::from_tag maps the `type` string onto a fixed set of kinds.
//    Anything we don't recognize becomes EventKind::Other.
// 2. classify() matches on the kind and pulls the interesting fields out of
//    the payload (commit count, issue number, ref name, release tag...).
// 3. Activity implements Display, which gives the human description.
//
// A payload that is missing or has an unexpected shape never drops the
// event: the fields just fall back to "unknown" (None / 0).
//
// Rust concepts:
// - Enums with data: each variant carries exactly the fields it needs
// - Exhaustive match: adding a kind forces every match to handle it
// - DeserializeOwned: "any type serde can build without borrowing"
// =============================================================================

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::github::Event;

/// The event types we know how to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    IssueComment,
    Issues,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Watch,
    Create,
    Delete,
    Fork,
    Release,
    Other,
}

impl EventKind {
    /// Looks up the kind for a GitHub `type` tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => EventKind::Push,
            "IssueCommentEvent" => EventKind::IssueComment,
            "IssuesEvent" => EventKind::Issues,
            "PullRequestEvent" => EventKind::PullRequest,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "WatchEvent" => EventKind::Watch,
            "CreateEvent" => EventKind::Create,
            "DeleteEvent" => EventKind::Delete,
            "ForkEvent" => EventKind::Fork,
            "ReleaseEvent" => EventKind::Release,
            _ => EventKind::Other,
        }
    }
}

/// What a single event means, with the fields needed to describe it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Push { commits: u64 },
    IssueComment { number: Option<u64> },
    Issue { action: String, number: Option<u64> },
    PullRequest { action: String, number: Option<u64> },
    PullRequestReview { number: Option<u64> },
    PullRequestReviewComment { number: Option<u64> },
    Starred,
    Created { ref_type: String, ref_name: Option<String> },
    Deleted { ref_type: String, ref_name: Option<String> },
    Forked { forkee: Option<String> },
    Released { tag: Option<String> },
    /// Unrecognized event; keeps the raw `type` string
    Other { tag: String },
}

impl Activity {
    pub fn kind(&self) -> EventKind {
        match self {
            Activity::Push { .. } => EventKind::Push,
            Activity::IssueComment { .. } => EventKind::IssueComment,
            Activity::Issue { .. } => EventKind::Issues,
            Activity::PullRequest { .. } => EventKind::PullRequest,
            Activity::PullRequestReview { .. } => EventKind::PullRequestReview,
            Activity::PullRequestReviewComment { .. } => EventKind::PullRequestReviewComment,
            Activity::Starred => EventKind::Watch,
            Activity::Created { .. } => EventKind::Create,
            Activity::Deleted { .. } => EventKind::Delete,
            Activity::Forked { .. } => EventKind::Fork,
            Activity::Released { .. } => EventKind::Release,
            Activity::Other { .. } => EventKind::Other,
        }
    }
}

// "#42", or "#?" when the payload didn't tell us
struct Number(Option<u64>);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "#{}", n),
            None => write!(f, "#?"),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Push { commits } => write!(f, "pushed {} commit(s)", commits),
            Activity::IssueComment { number } => {
                write!(f, "commented on issue {}", Number(*number))
            }
            Activity::Issue { action, number } => {
                write!(f, "{} issue {}", action, Number(*number))
            }
            Activity::PullRequest { action, number } => {
                write!(f, "{} pull request {}", action, Number(*number))
            }
            Activity::PullRequestReview { number } => {
                write!(f, "reviewed pull request {}", Number(*number))
            }
            Activity::PullRequestReviewComment { number } => {
                write!(f, "commented on pull request {}", Number(*number))
            }
            Activity::Starred => write!(f, "starred the repository"),
            Activity::Created { ref_type, ref_name } => {
                write!(f, "created {}", ref_type)?;
                if let Some(name) = ref_name {
                    write!(f, " {}", name)?;
                }
                Ok(())
            }
            Activity::Deleted { ref_type, ref_name } => {
                write!(f, "deleted {}", ref_type)?;
                if let Some(name) = ref_name {
                    write!(f, " {}", name)?;
                }
                Ok(())
            }
            Activity::Forked { forkee: Some(name) } => write!(f, "forked to {}", name),
            Activity::Forked { forkee: None } => write!(f, "forked the repository"),
            Activity::Released { tag: Some(tag) } => write!(f, "released {}", tag),
            Activity::Released { tag: None } => write!(f, "published a release"),
            Activity::Other { tag } => write!(f, "{}", tag),
        }
    }
}

// -----------------------------------------------------------------------------
// Payload shapes. Every field is optional so a partial payload still parses.
// -----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PushPayload {
    /// Total commits in the push (the `commits` array is capped at 20)
    size: Option<u64>,
    commits: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Numbered {
    number: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IssuePayload {
    action: Option<String>,
    issue: Option<Numbered>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PullRequestRef {
    number: Option<u64>,
    merged: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PullRequestPayload {
    action: Option<String>,
    number: Option<u64>,
    pull_request: Option<PullRequestRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RefPayload {
    ref_type: Option<String>,
    #[serde(rename = "ref")]
    ref_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Forkee {
    full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ForkPayload {
    forkee: Option<Forkee>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReleaseInfo {
    tag_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReleasePayload {
    release: Option<ReleaseInfo>,
}

// Decodes the payload into T, falling back to T::default() on a bad shape
fn payload<T: DeserializeOwned + Default>(event: &Event) -> T {
    if event.payload.is_null() {
        return T::default();
    }

    match T::deserialize(&event.payload) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(kind = %event.kind, repo = %event.repo.name, error = %e, "unexpected payload shape");
            T::default()
        }
    }
}

/// Classifies one event. Never fails: unknown kinds become Activity::Other
pub fn classify(event: &Event) -> Activity {
    match EventKind::from_tag(&event.kind) {
        EventKind::Push => {
            let p: PushPayload = payload(event);
            let commits = p
                .size
                .or_else(|| p.commits.map(|c| c.len() as u64))
                .unwrap_or(0);
            Activity::Push { commits }
        }
        EventKind::IssueComment => {
            let p: IssuePayload = payload(event);
            Activity::IssueComment {
                number: p.issue.and_then(|i| i.number),
            }
        }
        EventKind::Issues => {
            let p: IssuePayload = payload(event);
            Activity::Issue {
                action: p.action.unwrap_or_else(|| "opened".to_string()),
                number: p.issue.and_then(|i| i.number),
            }
        }
        EventKind::PullRequest => {
            let p: PullRequestPayload = payload(event);
            let merged = p
                .pull_request
                .as_ref()
                .and_then(|pr| pr.merged)
                .unwrap_or(false);
            let action = match p.action.as_deref() {
                // GitHub reports a merge as "closed" with merged = true
                Some("closed") if merged => "merged".to_string(),
                Some(action) => action.to_string(),
                None => "opened".to_string(),
            };
            Activity::PullRequest {
                action,
                number: p.number.or_else(|| p.pull_request.and_then(|pr| pr.number)),
            }
        }
        EventKind::PullRequestReview => {
            let p: PullRequestPayload = payload(event);
            Activity::PullRequestReview {
                number: p.pull_request.and_then(|pr| pr.number),
            }
        }
        EventKind::PullRequestReviewComment => {
            let p: PullRequestPayload = payload(event);
            Activity::PullRequestReviewComment {
                number: p.pull_request.and_then(|pr| pr.number),
            }
        }
        EventKind::Watch => Activity::Starred,
        EventKind::Create => {
            let p: RefPayload = payload(event);
            Activity::Created {
                ref_type: p.ref_type.unwrap_or_else(|| "ref".to_string()),
                ref_name: p.ref_name,
            }
        }
        EventKind::Delete => {
            let p: RefPayload = payload(event);
            Activity::Deleted {
                ref_type: p.ref_type.unwrap_or_else(|| "ref".to_string()),
                ref_name: p.ref_name,
            }
        }
        EventKind::Fork => {
            let p: ForkPayload = payload(event);
            Activity::Forked {
                forkee: p.forkee.and_then(|f| f.full_name),
            }
        }
        EventKind::Release => {
            let p: ReleasePayload = payload(event);
            Activity::Released {
                tag: p.release.and_then(|r| r.tag_name),
            }
        }
        EventKind::Other => Activity::Other {
            tag: event.kind.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::{json, Value};

    fn event(kind: &str, payload: Value) -> Event {
        Event::new(kind, "octocat/hello", Utc::now(), payload)
    }

    fn describe(kind: &str, payload: Value) -> String {
        classify(&event(kind, payload)).to_string()
    }

    #[test]
    fn test_push_uses_size() {
        let activity = classify(&event("PushEvent", json!({"size": 3, "commits": [{}]})));
        assert_eq!(activity, Activity::Push { commits: 3 });
        assert_eq!(activity.to_string(), "pushed 3 commit(s)");
    }

    #[test]
    fn test_push_falls_back_to_commit_list() {
        let activity = classify(&event("PushEvent", json!({"commits": [{}, {}]})));
        assert_eq!(activity, Activity::Push { commits: 2 });
    }

    #[test]
    fn test_issue_and_pull_request_descriptions() {
        assert_eq!(
            describe("IssueCommentEvent", json!({"issue": {"number": 7}})),
            "commented on issue #7"
        );
        assert_eq!(
            describe("IssuesEvent", json!({"action": "opened", "issue": {"number": 12}})),
            "opened issue #12"
        );
        assert_eq!(
            describe("IssuesEvent", json!({"action": "closed", "issue": {"number": 12}})),
            "closed issue #12"
        );
        assert_eq!(
            describe("PullRequestEvent", json!({"action": "opened", "number": 5})),
            "opened pull request #5"
        );
        assert_eq!(
            describe(
                "PullRequestReviewEvent",
                json!({"action": "created", "pull_request": {"number": 9}})
            ),
            "reviewed pull request #9"
        );
        assert_eq!(
            describe(
                "PullRequestReviewCommentEvent",
                json!({"pull_request": {"number": 9}})
            ),
            "commented on pull request #9"
        );
    }

    #[test]
    fn test_closed_and_merged_pull_request_is_merged() {
        let payload = json!({
            "action": "closed",
            "number": 5,
            "pull_request": {"number": 5, "merged": true}
        });
        assert_eq!(describe("PullRequestEvent", payload), "merged pull request #5");
    }

    #[test]
    fn test_ref_star_fork_release_descriptions() {
        assert_eq!(describe("WatchEvent", json!({"action": "started"})), "starred the repository");
        assert_eq!(
            describe("CreateEvent", json!({"ref_type": "branch", "ref": "main"})),
            "created branch main"
        );
        assert_eq!(
            describe("CreateEvent", json!({"ref_type": "repository", "ref": null})),
            "created repository"
        );
        assert_eq!(
            describe("DeleteEvent", json!({"ref_type": "tag", "ref": "v0.1"})),
            "deleted tag v0.1"
        );
        assert_eq!(
            describe("ForkEvent", json!({"forkee": {"full_name": "alice/hello"}})),
            "forked to alice/hello"
        );
        assert_eq!(
            describe("ReleaseEvent", json!({"release": {"tag_name": "v1.2.0"}})),
            "released v1.2.0"
        );
    }

    #[test]
    fn test_unknown_type_keeps_raw_tag() {
        let activity = classify(&event("Foo", json!({"anything": true})));
        assert_eq!(activity, Activity::Other { tag: "Foo".to_string() });
        assert_eq!(activity.kind(), EventKind::Other);
        assert_eq!(activity.to_string(), "Foo");
    }

    #[test]
    fn test_malformed_payload_still_classifies() {
        assert_eq!(
            describe("IssuesEvent", json!({"issue": {"number": "not-a-number"}})),
            "opened issue #?"
        );
        assert_eq!(describe("PushEvent", Value::Null), "pushed 0 commit(s)");
        assert_eq!(describe("ReleaseEvent", json!([1, 2, 3])), "published a release");
    }

    #[test]
    fn test_kind_round_trips_through_activity() {
        let tags = [
            "PushEvent",
            "IssueCommentEvent",
            "IssuesEvent",
            "PullRequestEvent",
            "PullRequestReviewEvent",
            "PullRequestReviewCommentEvent",
            "WatchEvent",
            "CreateEvent",
            "DeleteEvent",
            "ForkEvent",
            "ReleaseEvent",
            "GollumEvent",
        ];
        for tag in tags {
            let kind = EventKind::from_tag(tag);
            assert_eq!(classify(&event(tag, json!({}))).kind(), kind, "{}", tag);
        }
    }
}
