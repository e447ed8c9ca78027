//! Adapter implementations for checklist ports.

pub mod github;
pub mod memory;
