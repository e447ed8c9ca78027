//! Shared world state for checklist gate BDD scenarios.

use std::sync::Arc;

use checklist_gate::checklist::{
    adapters::memory::InMemoryPullRequestHost,
    domain::{CommentId, PullRequest},
    services::{ChecklistGateService, ChecklistReconciler, GateError, GateOutcome},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestGateService = ChecklistGateService<InMemoryPullRequestHost, DefaultClock>;

/// Description of the regression-risk task in the embedded catalog.
pub const REGRESSION_DESCRIPTION: &str = "I am sure that there is no possibility of a regression in this code (Otherwise add label `qa-needed`)";

/// Scenario world for checklist gate behaviour tests.
pub struct GateWorld {
    pub host: Arc<InMemoryPullRequestHost>,
    pub service: TestGateService,
    pub pull_request: Option<PullRequest>,
    pub prior_checklist: Option<CommentId>,
    pub last_result: Option<Result<GateOutcome, GateError>>,
}

impl GateWorld {
    /// Creates a world backed by an empty in-memory host.
    ///
    /// # Panics
    ///
    /// Panics when the embedded catalog is invalid.
    #[must_use]
    pub fn new() -> Self {
        let host = Arc::new(InMemoryPullRequestHost::new());
        let reconciler =
            ChecklistReconciler::with_embedded_catalog().expect("embedded catalog is valid");
        let service =
            ChecklistGateService::new(Arc::clone(&host), Arc::new(DefaultClock), reconciler);
        Self {
            host,
            service,
            pull_request: None,
            prior_checklist: None,
            last_result: None,
        }
    }

    /// Returns the scenario pull request.
    pub fn pull_request(&self) -> Result<&PullRequest, eyre::Report> {
        self.pull_request
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing pull request in scenario world"))
    }
}

impl Default for GateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GateWorld {
    GateWorld::default()
}

/// Formats the regression task line as the checklist renders it.
pub fn regression_line(checked: bool) -> String {
    let marker = if checked { 'x' } else { ' ' };
    format!("- [{marker}] {REGRESSION_DESCRIPTION} [qa-task]")
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
