//! Error types for checklist domain validation, catalog loading, and rendering.

use thiserror::Error;

/// Errors returned while constructing checklist domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChecklistDomainError {
    /// The task name is empty or contains characters that cannot round-trip
    /// inside a bracketed suffix.
    #[error("invalid task name '{0}', expected ASCII alphanumerics, '-' or '_'")]
    InvalidTaskName(String),

    /// The task description is empty after trimming.
    #[error("task description for '{0}' must not be empty")]
    EmptyTaskDescription(String),

    /// The task description spans more than one line.
    #[error("task description for '{0}' must fit on a single line")]
    MultilineTaskDescription(String),

    /// Two tasks in the same group share a name.
    #[error("duplicate task name '{name}' in {role} group")]
    DuplicateTaskName {
        /// Group role the duplicate was found in.
        role: String,
        /// Repeated task name.
        name: String,
    },

    /// The embedded catalog document could not be decoded.
    #[error("invalid task catalog: {0}")]
    InvalidCatalog(String),

    /// The pull request number is invalid.
    #[error("invalid pull request number {0}, expected a positive integer")]
    InvalidPullRequestNumber(u64),

    /// The comment identifier is invalid.
    #[error("invalid comment identifier {0}, expected a positive integer")]
    InvalidCommentId(u64),

    /// The head commit SHA is empty after trimming.
    #[error("head commit SHA must not be empty")]
    EmptyHeadSha,

    /// The label name is empty after trimming.
    #[error("label name must not be empty")]
    EmptyLabel,

    /// The checklist template failed to render.
    #[error("checklist rendering failed: {0}")]
    Render(String),
}
