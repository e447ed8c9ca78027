//! Port contracts for checklist reconciliation.
//!
//! Ports define the source-control host operations the gate service depends
//! on, without tying it to a particular API client.

pub mod pull_request_host;

pub use pull_request_host::{PullRequestHost, PullRequestHostError, PullRequestHostResult};
