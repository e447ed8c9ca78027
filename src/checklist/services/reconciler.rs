//! Pure reconciliation of catalog, prior checklist, and labels.

use chrono::{DateTime, Utc};

use crate::checklist::domain::{
    CatalogContext, CheckRun, ChecklistDomainError, CommentId, HeadSha, IssueComment, LabelSet,
    OutstandingState, TaskCatalog, TaskGroup, Verdict, find_checklist_comment,
    has_outstanding_tasks, parse_prior_state, render,
};

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    body: String,
    target_comment: Option<CommentId>,
    outstanding: OutstandingState,
    verdict: Verdict,
    author: TaskGroup,
    reviewer: TaskGroup,
}

impl Reconciliation {
    /// Returns the rendered checklist body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the comment to update, or `None` when a new comment is needed.
    #[must_use]
    pub const fn target_comment(&self) -> Option<CommentId> {
        self.target_comment
    }

    /// Returns `true` when an existing checklist comment will be updated.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.target_comment.is_some()
    }

    /// Returns the outstanding-work flag.
    #[must_use]
    pub const fn outstanding(&self) -> OutstandingState {
        self.outstanding
    }

    /// Returns the derived verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the merged author tasks.
    #[must_use]
    pub const fn author(&self) -> &TaskGroup {
        &self.author
    }

    /// Returns the merged reviewer tasks.
    #[must_use]
    pub const fn reviewer(&self) -> &TaskGroup {
        &self.reviewer
    }

    /// Builds the check-run payload for the verdict.
    #[must_use]
    pub fn check_run(&self, head_sha: &HeadSha, started_at: DateTime<Utc>, now: DateTime<Utc>) -> CheckRun {
        self.verdict.check_run(head_sha, started_at, now)
    }
}

/// Reconciles a catalog against pull request comments and labels.
///
/// The reconciler performs no I/O; callers supply the fetched comments and
/// labels and publish the returned [`Reconciliation`].
#[derive(Debug, Clone)]
pub struct ChecklistReconciler {
    catalog: TaskCatalog,
}

impl ChecklistReconciler {
    /// Creates a reconciler for the given catalog.
    #[must_use]
    pub const fn new(catalog: TaskCatalog) -> Self {
        Self { catalog }
    }

    /// Creates a reconciler for the catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError`] when the embedded catalog is invalid.
    pub fn with_embedded_catalog() -> Result<Self, ChecklistDomainError> {
        Ok(Self::new(TaskCatalog::embedded()?))
    }

    /// Returns the catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    /// Runs one reconciliation pass.
    ///
    /// The first comment starting with the checklist title is the canonical
    /// checklist. The outstanding scan covers every comment, with the
    /// canonical checklist judged by its newly rendered body, so a pull
    /// request without a checklist still starts pending.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError`] when the catalog cannot be built or the
    /// body fails to render.
    pub fn reconcile(
        &self,
        comments: &[IssueComment],
        labels: &LabelSet,
    ) -> Result<Reconciliation, ChecklistDomainError> {
        let mut groups = self.catalog.build(CatalogContext::new(labels))?;

        let prior = find_checklist_comment(comments);
        parse_prior_state(
            prior.map(IssueComment::body),
            &mut groups.author,
            &mut groups.reviewer,
        );
        let body = render(&groups.author, &groups.reviewer)?;

        let target_comment = prior.map(IssueComment::id);
        let outstanding = OutstandingState {
            exists: has_outstanding_tasks(current_bodies(comments, target_comment, &body)),
        };

        Ok(Reconciliation {
            target_comment,
            outstanding,
            verdict: Verdict::from_outstanding(outstanding),
            author: groups.author,
            reviewer: groups.reviewer,
            body,
        })
    }
}

/// Comment bodies as they will read once the new checklist is published.
fn current_bodies<'a>(
    comments: &'a [IssueComment],
    target: Option<CommentId>,
    body: &'a str,
) -> impl Iterator<Item = &'a str> {
    comments
        .iter()
        .map(move |comment| {
            if Some(comment.id()) == target {
                body
            } else {
                comment.body()
            }
        })
        .chain(target.is_none().then_some(body))
}
