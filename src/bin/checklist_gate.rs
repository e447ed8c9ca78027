//! Runs the workflow checklist gate for the event that triggered the job.
//!
//! Usage inside a GitHub Actions step:
//!
//! ```text
//! checklist-gate
//! ```
//!
//! Configuration is read from the runner environment (`GITHUB_TOKEN`,
//! `GITHUB_REPOSITORY`, `GITHUB_EVENT_NAME`, `GITHUB_EVENT_PATH`,
//! `INPUT_TRIGGER`, and the optional `INPUT_PREFIX_ONLY`, `INPUT_REACTION`,
//! `GITHUB_API_URL`, `CHECKLIST_LOG_JSON`). Any failure ends the job with a
//! non-zero exit status and a generic message; events that do not concern a
//! pull request end it successfully without side effects.

use std::process::ExitCode;
use std::sync::Arc;

use checklist_gate::checklist::adapters::github::GitHubPullRequestHost;
use checklist_gate::checklist::services::{
    ChecklistGateService, ChecklistReconciler, GateOutcome,
};
use checklist_gate::config::ActionConfig;
use checklist_gate::telemetry::init_tracing;
use mockable::DefaultClock;
use thiserror::Error;
use tracing::{error, info};

/// Boxed error type for the run result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that end the run as failed.
#[derive(Debug, Error)]
enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] checklist_gate::config::ConfigError),
    #[error("checklist error: {0}")]
    Checklist(#[source] BoxError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ActionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(false);
            error!(error = %err, "invalid action configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_json);

    match run(&config).await {
        Ok(GateOutcome::Skipped(reason)) => {
            info!(?reason, "run skipped");
            ExitCode::SUCCESS
        }
        Ok(GateOutcome::Reconciled { reconciliation, .. }) => {
            info!(verdict = reconciliation.verdict().as_str(), "run completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Unexpected error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ActionConfig) -> Result<GateOutcome, RunError> {
    let event = config.load_event()?;
    let host = GitHubPullRequestHost::new(&config.github)
        .map_err(|err| RunError::Checklist(Box::new(err)))?;
    let reconciler =
        ChecklistReconciler::with_embedded_catalog().map_err(|err| RunError::Checklist(Box::new(err)))?;
    let service = ChecklistGateService::new(Arc::new(host), Arc::new(DefaultClock), reconciler);
    service
        .run(&event)
        .await
        .map_err(|err| RunError::Checklist(Box::new(err)))
}
