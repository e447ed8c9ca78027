//! Workflow checklist reconciliation for pull requests.
//!
//! Keeps one checklist comment per pull request in step with the task
//! catalog and the applied labels, preserving ticked boxes across runs, and
//! reports whether any box on the pull request is still unticked. The module
//! follows hexagonal architecture:
//!
//! - Domain types, parser, and renderer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Reconciliation and gate services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
