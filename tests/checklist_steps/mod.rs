//! Step definitions for checklist gate BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
