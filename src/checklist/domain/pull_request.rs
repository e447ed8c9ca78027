//! Pull request value objects resolved from the triggering event.

use super::ChecklistDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive pull request number on the source-control host.
///
/// # Examples
///
///     use checklist_gate::checklist::domain::PullRequestNumber;
///
///     let number = PullRequestNumber::new(42).expect("valid");
///     assert_eq!(number.value(), 42);
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Creates a validated pull request number.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::InvalidPullRequestNumber`] when the
    /// value is zero.
    pub const fn new(value: u64) -> Result<Self, ChecklistDomainError> {
        if value == 0 {
            return Err(ChecklistDomainError::InvalidPullRequestNumber(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Commit SHA at the head of the pull request, used to anchor check runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadSha(String);

impl HeadSha {
    /// Creates a validated head SHA.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyHeadSha`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ChecklistDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChecklistDomainError::EmptyHeadSha);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the SHA as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeadSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The pull request a reconciliation pass runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    number: PullRequestNumber,
    head_sha: HeadSha,
}

impl PullRequest {
    /// Creates a pull request from validated components.
    #[must_use]
    pub const fn new(number: PullRequestNumber, head_sha: HeadSha) -> Self {
        Self { number, head_sha }
    }

    /// Creates a pull request from raw host values.
    ///
    /// # Errors
    ///
    /// Returns a [`ChecklistDomainError`] when either component is invalid.
    pub fn from_parts(number: u64, head_sha: &str) -> Result<Self, ChecklistDomainError> {
        Ok(Self::new(
            PullRequestNumber::new(number)?,
            HeadSha::new(head_sha)?,
        ))
    }

    /// Returns the pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    /// Returns the head commit SHA.
    #[must_use]
    pub const fn head_sha(&self) -> &HeadSha {
        &self.head_sha
    }
}
