//! Host port for reading pull request state and publishing results.

use crate::checklist::domain::{
    CheckRun, CommentId, IssueComment, LabelSet, PullRequest, PullRequestNumber,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for host operations.
pub type PullRequestHostResult<T> = Result<T, PullRequestHostError>;

/// Source-control host contract.
///
/// One instance is constructed per run and passed to the gate service.
/// Calls are issued one at a time; implementations need not pipeline.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Fetches a pull request by number.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::NotFound`] when no such pull request
    /// exists, or another variant when the host call fails.
    async fn fetch_pull_request(
        &self,
        number: PullRequestNumber,
    ) -> PullRequestHostResult<PullRequest>;

    /// Lists every comment on the pull request, oldest first.
    async fn list_comments(
        &self,
        number: PullRequestNumber,
    ) -> PullRequestHostResult<Vec<IssueComment>>;

    /// Lists the labels applied to the pull request.
    async fn list_labels(&self, number: PullRequestNumber) -> PullRequestHostResult<LabelSet>;

    /// Updates `existing` in place when given, otherwise creates a new
    /// comment.
    async fn upsert_comment(
        &self,
        number: PullRequestNumber,
        body: &str,
        existing: Option<CommentId>,
    ) -> PullRequestHostResult<()>;

    /// Submits a check run.
    async fn create_check_run(&self, check_run: &CheckRun) -> PullRequestHostResult<()>;
}

/// Errors returned by host implementations.
#[derive(Debug, Clone, Error)]
pub enum PullRequestHostError {
    /// The pull request does not exist.
    #[error("pull request not found: #{0}")]
    NotFound(PullRequestNumber),

    /// The comment to update does not exist.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),

    /// The host answered with an unexpected status.
    #[error("host returned status {status} for {operation}")]
    UnexpectedStatus {
        /// Operation being performed.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// Transport or decoding failure.
    #[error("host request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl PullRequestHostError {
    /// Wraps a transport or decoding error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
