//! Outstanding-work verdict and the check-run payload it maps to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HeadSha;

/// Name of the status check reported on the pull request.
pub const CHECK_RUN_NAME: &str = "Workflow checklist";

/// Whether any unchecked box exists among the pull request's comments.
///
/// This is a presence flag, not a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutstandingState {
    /// `true` when at least one comment contains an unchecked box.
    pub exists: bool,
}

/// Derived pass/fail decision for the pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Unchecked tasks remain; the check stays pending.
    ActionRequired,
    /// Nothing is outstanding; the check completes successfully.
    Success,
}

impl Verdict {
    /// Derives the verdict from the outstanding state.
    #[must_use]
    pub const fn from_outstanding(state: OutstandingState) -> Self {
        if state.exists {
            Self::ActionRequired
        } else {
            Self::Success
        }
    }

    /// Returns the canonical lowercase verdict name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActionRequired => "action_required",
            Self::Success => "success",
        }
    }

    /// Returns the fixed human-readable output for this verdict.
    #[must_use]
    pub fn output(self) -> CheckRunOutput {
        let (title, summary, text) = match self {
            Self::ActionRequired => (
                "Outstanding tasks",
                "There are unchecked tasks on this pull request.",
                "Tick every box in the workflow checklist, and in any other checklist \
                 left on this pull request, before merging.",
            ),
            Self::Success => (
                "All tasks completed",
                "Every checklist task on this pull request has been ticked.",
                "No outstanding tasks remain.",
            ),
        };
        CheckRunOutput {
            title: title.to_owned(),
            summary: summary.to_owned(),
            text: text.to_owned(),
        }
    }

    /// Builds the check-run payload for this verdict.
    ///
    /// A pending verdict carries no conclusion and no completion timestamp.
    #[must_use]
    pub fn check_run(self, head_sha: &HeadSha, started_at: DateTime<Utc>, now: DateTime<Utc>) -> CheckRun {
        let (status, conclusion, completed_at) = match self {
            Self::ActionRequired => (CheckRunStatus::InProgress, None, None),
            Self::Success => (
                CheckRunStatus::Completed,
                Some(CheckRunConclusion::Success),
                Some(now),
            ),
        };
        CheckRun {
            name: CHECK_RUN_NAME.to_owned(),
            head_sha: head_sha.clone(),
            status,
            conclusion,
            started_at,
            completed_at,
            output: self.output(),
        }
    }
}

/// Check-run lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunStatus {
    /// The check is waiting on outstanding work.
    InProgress,
    /// The check has finished.
    Completed,
}

/// Final conclusion of a completed check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunConclusion {
    /// Every task was completed.
    Success,
}

/// Human-readable check-run output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunOutput {
    /// Short title.
    pub title: String,
    /// One-line summary.
    pub summary: String,
    /// Longer explanation.
    pub text: String,
}

/// Status-check payload submitted by the host collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRun {
    /// Check name shown on the pull request.
    pub name: String,
    /// Commit the check is attached to.
    pub head_sha: HeadSha,
    /// Lifecycle status.
    pub status: CheckRunStatus,
    /// Conclusion, present only once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<CheckRunConclusion>,
    /// When the reconciliation pass started.
    pub started_at: DateTime<Utc>,
    /// When the check completed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Human-readable output.
    pub output: CheckRunOutput,
}
