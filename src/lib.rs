//! Checklist gate: a CI step that maintains a workflow checklist comment on a
//! pull request and reports its completion as a status check.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure reconciliation logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the source-control host
//! - **Adapters**: Concrete implementations of ports (GitHub, in-memory)
//!
//! # Modules
//!
//! - [`checklist`]: Task catalog, checklist format, reconciliation, and gate
//! - [`config`]: Action configuration read from the runner environment
//! - [`telemetry`]: Logging initialisation for the binary

pub mod checklist;
pub mod config;
pub mod telemetry;
