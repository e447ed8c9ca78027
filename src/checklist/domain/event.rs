//! Decoding of the triggering workflow event.

use serde::Deserialize;
use thiserror::Error;

use super::{ChecklistDomainError, PullRequest, PullRequestNumber};

/// Errors raised while decoding an event payload.
#[derive(Debug, Error)]
pub enum EventError {
    /// The payload is not valid JSON for the named event.
    #[error("malformed {event} payload: {source}")]
    Malformed {
        /// Event name.
        event: String,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The payload decoded but carries invalid values.
    #[error(transparent)]
    Domain(#[from] ChecklistDomainError),
}

/// The event that triggered the run, reduced to what the gate needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A pull request event carrying the pull request itself.
    PullRequest(PullRequest),
    /// A comment on an issue, which may or may not be a pull request.
    IssueComment {
        /// Number shared by the issue and its pull request.
        issue_number: PullRequestNumber,
        /// Whether the issue is backed by a pull request.
        is_pull_request: bool,
    },
    /// Any other event, or a pull request event without pull request data.
    Unsupported {
        /// Event name as reported by the runner.
        name: String,
    },
}

#[derive(Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    pull_request: Option<RawPullRequest>,
}

#[derive(Deserialize)]
struct RawPullRequest {
    number: u64,
    head: RawHead,
}

#[derive(Deserialize)]
struct RawHead {
    sha: String,
}

#[derive(Deserialize)]
struct IssueCommentPayload {
    issue: RawIssue,
}

#[derive(Deserialize)]
struct RawIssue {
    number: u64,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

impl TriggerEvent {
    /// Decodes the JSON payload of the named event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] when the payload does not match the shape of the
    /// named event or carries invalid numbers.
    pub fn from_payload(event_name: &str, payload: &str) -> Result<Self, EventError> {
        let malformed = |source| EventError::Malformed {
            event: event_name.to_owned(),
            source,
        };

        if event_name == "issue_comment" {
            let decoded: IssueCommentPayload = serde_json::from_str(payload).map_err(malformed)?;
            return Ok(Self::IssueComment {
                issue_number: PullRequestNumber::new(decoded.issue.number)?,
                is_pull_request: decoded
                    .issue
                    .pull_request
                    .is_some_and(|value| !value.is_null()),
            });
        }

        if event_name.starts_with("pull_request") {
            let decoded: PullRequestPayload = serde_json::from_str(payload).map_err(malformed)?;
            return Ok(match decoded.pull_request {
                Some(raw) => Self::PullRequest(PullRequest::from_parts(raw.number, &raw.head.sha)?),
                None => Self::Unsupported {
                    name: event_name.to_owned(),
                },
            });
        }

        Ok(Self::Unsupported {
            name: event_name.to_owned(),
        })
    }
}
