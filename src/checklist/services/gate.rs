//! Gate service: resolves the pull request, reconciles, and publishes.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info};

use super::reconciler::{ChecklistReconciler, Reconciliation};
use crate::checklist::{
    domain::{ChecklistDomainError, PullRequest, PullRequestNumber, TriggerEvent},
    ports::{PullRequestHost, PullRequestHostError},
};

/// Service-level errors for a gate run.
#[derive(Debug, Error)]
pub enum GateError {
    /// Catalog or rendering failure.
    #[error(transparent)]
    Domain(#[from] ChecklistDomainError),
    /// A host call failed.
    #[error(transparent)]
    Host(#[from] PullRequestHostError),
}

/// Result type for gate service operations.
pub type GateResult<T> = Result<T, GateError>;

/// Why a run ended without touching the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The comment was left on an issue that is not a pull request.
    NotAPullRequest(PullRequestNumber),
    /// The event carries no pull request context.
    UnsupportedEvent(String),
}

/// Outcome of a gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Nothing applied; the run succeeds silently.
    Skipped(SkipReason),
    /// The checklist comment was published and a check run submitted.
    Reconciled {
        /// Pull request the pass ran against.
        pull_request: PullRequest,
        /// Published reconciliation.
        reconciliation: Reconciliation,
    },
}

/// Orchestrates one reconciliation pass against a pull request host.
#[derive(Clone)]
pub struct ChecklistGateService<H, C>
where
    H: PullRequestHost,
    C: Clock + Send + Sync,
{
    host: Arc<H>,
    clock: Arc<C>,
    reconciler: ChecklistReconciler,
}

impl<H, C> ChecklistGateService<H, C>
where
    H: PullRequestHost,
    C: Clock + Send + Sync,
{
    /// Creates a gate service.
    #[must_use]
    pub const fn new(host: Arc<H>, clock: Arc<C>, reconciler: ChecklistReconciler) -> Self {
        Self {
            host,
            clock,
            reconciler,
        }
    }

    /// Runs the gate for the triggering event.
    ///
    /// Host calls are issued sequentially. The check run is only submitted
    /// after the comment has been published.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when any host call fails or the checklist cannot
    /// be built.
    pub async fn run(&self, event: &TriggerEvent) -> GateResult<GateOutcome> {
        let started_at = self.clock.utc();
        let pull_request = match self.resolve_pull_request(event).await? {
            Ok(pull_request) => pull_request,
            Err(reason) => {
                info!(?reason, "event does not target a pull request, nothing to do");
                return Ok(GateOutcome::Skipped(reason));
            }
        };
        let number = pull_request.number();

        let comments = self.host.list_comments(number).await?;
        let labels = self.host.list_labels(number).await?;
        debug!(
            pull_request = %number,
            comments = comments.len(),
            labels = labels.len(),
            "loaded pull request state"
        );

        let reconciliation = self.reconciler.reconcile(&comments, &labels)?;
        self.host
            .upsert_comment(number, reconciliation.body(), reconciliation.target_comment())
            .await?;
        info!(
            pull_request = %number,
            updated = reconciliation.is_update(),
            "published checklist comment"
        );

        let check_run =
            reconciliation.check_run(pull_request.head_sha(), started_at, self.clock.utc());
        self.host.create_check_run(&check_run).await?;
        info!(
            pull_request = %number,
            verdict = reconciliation.verdict().as_str(),
            "submitted check run"
        );

        Ok(GateOutcome::Reconciled {
            pull_request,
            reconciliation,
        })
    }

    async fn resolve_pull_request(
        &self,
        event: &TriggerEvent,
    ) -> GateResult<Result<PullRequest, SkipReason>> {
        match event {
            TriggerEvent::PullRequest(pull_request) => Ok(Ok(pull_request.clone())),
            TriggerEvent::IssueComment {
                issue_number,
                is_pull_request: true,
            } => Ok(Ok(self.host.fetch_pull_request(*issue_number).await?)),
            TriggerEvent::IssueComment {
                issue_number,
                is_pull_request: false,
            } => Ok(Err(SkipReason::NotAPullRequest(*issue_number))),
            TriggerEvent::Unsupported { name } => {
                Ok(Err(SkipReason::UnsupportedEvent(name.clone())))
            }
        }
    }
}
