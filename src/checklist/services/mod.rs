//! Application services for checklist reconciliation.

mod gate;
mod reconciler;

pub use gate::{ChecklistGateService, GateError, GateOutcome, GateResult, SkipReason};
pub use reconciler::{ChecklistReconciler, Reconciliation};
