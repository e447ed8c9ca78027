//! Pull request comments and labels as seen by the reconciler.

use super::{ChecklistDomainError, layout};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Positive comment identifier on the source-control host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(u64);

impl CommentId {
    /// Creates a validated comment identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::InvalidCommentId`] when the value is
    /// zero.
    pub const fn new(value: u64) -> Result<Self, ChecklistDomainError> {
        if value == 0 {
            return Err(ChecklistDomainError::InvalidCommentId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment on the pull request conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    id: CommentId,
    body: String,
}

impl IssueComment {
    /// Creates a comment.
    #[must_use]
    pub fn new(id: CommentId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the comment body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` when this comment is a checklist comment.
    #[must_use]
    pub fn is_checklist(&self) -> bool {
        self.body.starts_with(layout::CHECKLIST_TITLE)
    }
}

/// Returns the first checklist comment in fetch order.
///
/// Later comments carrying the same title are ignored.
#[must_use]
pub fn find_checklist_comment(comments: &[IssueComment]) -> Option<&IssueComment> {
    comments.iter().find(|comment| comment.is_checklist())
}

/// Returns `true` when any of the comment bodies, managed or not, has an
/// unchecked box.
pub fn has_outstanding_tasks<'a>(bodies: impl IntoIterator<Item = &'a str>) -> bool {
    bodies
        .into_iter()
        .any(|body| body.contains(layout::UNCHECKED_MARKER))
}

/// A label applied to the pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Creates a validated label.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyLabel`] when the name is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ChecklistDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChecklistDomainError::EmptyLabel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = ChecklistDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(value: Label) -> Self {
        value.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of labels currently applied to a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(BTreeSet<Label>);

impl LabelSet {
    /// Creates an empty label set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` when a label with the given name is applied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|label| label.as_str() == name)
    }

    /// Adds a label.
    pub fn insert(&mut self, label: Label) {
        self.0.insert(label);
    }

    /// Returns labels in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no labels are applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
