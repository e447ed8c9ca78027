//! Domain model for checklist reconciliation.
//!
//! The checklist domain covers the task catalog, the text format of the
//! checklist comment, and the verdict derived from the pull request's
//! comments. Nothing here performs I/O.

mod catalog;
mod comment;
mod error;
mod event;
pub mod layout;
mod parser;
mod pull_request;
mod renderer;
mod task;
mod verdict;

pub use catalog::{
    CatalogContext, ChecklistGroups, TaskCatalog, TaskDefinition, VisibilityRule, build_catalog,
};
pub use comment::{
    CommentId, IssueComment, Label, LabelSet, find_checklist_comment, has_outstanding_tasks,
};
pub use error::ChecklistDomainError;
pub use event::{EventError, TriggerEvent};
pub use parser::{CheckboxLine, parse_prior_state};
pub use pull_request::{HeadSha, PullRequest, PullRequestNumber};
pub use renderer::render;
pub use task::{Task, TaskGroup, TaskName, TaskRole};
pub use verdict::{
    CHECK_RUN_NAME, CheckRun, CheckRunConclusion, CheckRunOutput, CheckRunStatus,
    OutstandingState, Verdict,
};
