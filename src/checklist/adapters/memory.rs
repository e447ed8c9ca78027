//! In-memory pull request host for tests and dry runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::checklist::{
    domain::{CheckRun, CommentId, IssueComment, Label, LabelSet, PullRequest, PullRequestNumber},
    ports::{PullRequestHost, PullRequestHostError, PullRequestHostResult},
};

/// Thread-safe in-memory host holding pull requests, comments, labels, and
/// submitted check runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPullRequestHost {
    state: Arc<RwLock<InMemoryHostState>>,
}

#[derive(Debug, Default)]
struct InMemoryHostState {
    pull_requests: HashMap<PullRequestNumber, PullRequest>,
    comments: HashMap<PullRequestNumber, Vec<IssueComment>>,
    labels: HashMap<PullRequestNumber, LabelSet>,
    check_runs: Vec<CheckRun>,
    last_comment_id: u64,
}

impl InMemoryHostState {
    fn next_comment_id(&mut self) -> PullRequestHostResult<CommentId> {
        self.last_comment_id += 1;
        CommentId::new(self.last_comment_id).map_err(PullRequestHostError::transport)
    }
}

impl InMemoryPullRequestHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PullRequestHostResult<RwLockReadGuard<'_, InMemoryHostState>> {
        self.state.read().map_err(|err| {
            PullRequestHostError::transport(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> PullRequestHostResult<RwLockWriteGuard<'_, InMemoryHostState>> {
        self.state.write().map_err(|err| {
            PullRequestHostError::transport(std::io::Error::other(err.to_string()))
        })
    }

    /// Registers a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::Transport`] when the state lock is
    /// poisoned.
    pub fn add_pull_request(&self, pull_request: PullRequest) -> PullRequestHostResult<()> {
        self.write()?
            .pull_requests
            .insert(pull_request.number(), pull_request);
        Ok(())
    }

    /// Appends a comment and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::Transport`] when the state lock is
    /// poisoned.
    pub fn add_comment(
        &self,
        number: PullRequestNumber,
        body: impl Into<String>,
    ) -> PullRequestHostResult<CommentId> {
        let mut state = self.write()?;
        let id = state.next_comment_id()?;
        state
            .comments
            .entry(number)
            .or_default()
            .push(IssueComment::new(id, body));
        Ok(id)
    }

    /// Applies a label.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::Transport`] when the state lock is
    /// poisoned.
    pub fn add_label(&self, number: PullRequestNumber, label: Label) -> PullRequestHostResult<()> {
        self.write()?.labels.entry(number).or_default().insert(label);
        Ok(())
    }

    /// Returns the comments on a pull request, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::Transport`] when the state lock is
    /// poisoned.
    pub fn comments(&self, number: PullRequestNumber) -> PullRequestHostResult<Vec<IssueComment>> {
        Ok(self
            .read()?
            .comments
            .get(&number)
            .cloned()
            .unwrap_or_default())
    }

    /// Returns every submitted check run in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`PullRequestHostError::Transport`] when the state lock is
    /// poisoned.
    pub fn check_runs(&self) -> PullRequestHostResult<Vec<CheckRun>> {
        Ok(self.read()?.check_runs.clone())
    }
}

#[async_trait]
impl PullRequestHost for InMemoryPullRequestHost {
    async fn fetch_pull_request(
        &self,
        number: PullRequestNumber,
    ) -> PullRequestHostResult<PullRequest> {
        self.read()?
            .pull_requests
            .get(&number)
            .cloned()
            .ok_or(PullRequestHostError::NotFound(number))
    }

    async fn list_comments(
        &self,
        number: PullRequestNumber,
    ) -> PullRequestHostResult<Vec<IssueComment>> {
        self.comments(number)
    }

    async fn list_labels(&self, number: PullRequestNumber) -> PullRequestHostResult<LabelSet> {
        Ok(self.read()?.labels.get(&number).cloned().unwrap_or_default())
    }

    async fn upsert_comment(
        &self,
        number: PullRequestNumber,
        body: &str,
        existing: Option<CommentId>,
    ) -> PullRequestHostResult<()> {
        let mut state = self.write()?;
        let Some(id) = existing else {
            let id = state.next_comment_id()?;
            state
                .comments
                .entry(number)
                .or_default()
                .push(IssueComment::new(id, body));
            return Ok(());
        };

        let comment = state
            .comments
            .get_mut(&number)
            .and_then(|comments| comments.iter_mut().find(|comment| comment.id() == id))
            .ok_or(PullRequestHostError::CommentNotFound(id))?;
        *comment = IssueComment::new(id, body);
        Ok(())
    }

    async fn create_check_run(&self, check_run: &CheckRun) -> PullRequestHostResult<()> {
        self.write()?.check_runs.push(check_run.clone());
        Ok(())
    }
}
