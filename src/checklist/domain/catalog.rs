//! Task catalog: the versioned list of checklist items and their visibility
//! rules.
//!
//! The default catalog ships embedded in the crate as `catalog.json`. Building
//! the catalog against the current label set yields fresh, unchecked task
//! groups whose visibility is a pure function of those labels.

use super::{ChecklistDomainError, LabelSet, Task, TaskGroup, TaskName, TaskRole};
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Rule deciding whether a task is shown for the current pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityRule {
    /// The task is always shown.
    #[default]
    Always,
    /// The task is shown unless the named label is applied.
    HiddenWhenLabel(String),
}

impl VisibilityRule {
    /// Evaluates the rule against the applied labels.
    ///
    /// Absence of an override label always means the task is shown.
    #[must_use]
    pub fn is_visible(&self, labels: &LabelSet) -> bool {
        match self {
            Self::Always => true,
            Self::HiddenWhenLabel(label) => !labels.contains(label),
        }
    }
}

/// Static definition of one checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Stable task name.
    pub name: TaskName,
    /// Text shown to the reader.
    pub description: String,
    /// Visibility rule; defaults to [`VisibilityRule::Always`].
    #[serde(default)]
    pub visibility: VisibilityRule,
}

impl TaskDefinition {
    /// Creates an always-visible task definition.
    #[must_use]
    pub fn new(name: TaskName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            visibility: VisibilityRule::Always,
        }
    }

    /// Hides the task while the given label is applied.
    #[must_use]
    pub fn hidden_when_label(mut self, label: impl Into<String>) -> Self {
        self.visibility = VisibilityRule::HiddenWhenLabel(label.into());
        self
    }

    fn instantiate(&self, labels: &LabelSet) -> Result<Task, ChecklistDomainError> {
        Ok(Task::new(self.name.clone(), self.description.as_str())?
            .with_visible(self.visibility.is_visible(labels)))
    }
}

/// Repository state the catalog is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct CatalogContext<'a> {
    labels: &'a LabelSet,
}

impl<'a> CatalogContext<'a> {
    /// Creates a context from the labels applied to the pull request.
    #[must_use]
    pub const fn new(labels: &'a LabelSet) -> Self {
        Self { labels }
    }

    /// Returns the applied labels.
    #[must_use]
    pub const fn labels(&self) -> &'a LabelSet {
        self.labels
    }
}

/// Author and reviewer task groups produced from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistGroups {
    /// Tasks answered by the pull request author.
    pub author: TaskGroup,
    /// Tasks answered by the reviewer.
    pub reviewer: TaskGroup,
}

/// Versioned catalog of task definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCatalog {
    version: u32,
    author: Vec<TaskDefinition>,
    reviewer: Vec<TaskDefinition>,
}

impl TaskCatalog {
    /// Creates a catalog, rejecting duplicate names within a group and blank
    /// or multi-line descriptions.
    ///
    /// # Errors
    ///
    /// Returns a [`ChecklistDomainError`] when a definition is invalid.
    pub fn new(
        version: u32,
        author: Vec<TaskDefinition>,
        reviewer: Vec<TaskDefinition>,
    ) -> Result<Self, ChecklistDomainError> {
        let catalog = Self {
            version,
            author,
            reviewer,
        };
        catalog.build(CatalogContext::new(&LabelSet::new()))?;
        Ok(catalog)
    }

    /// Loads the catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::InvalidCatalog`] when the embedded
    /// document is malformed.
    pub fn embedded() -> Result<Self, ChecklistDomainError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Decodes and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`ChecklistDomainError`] when the document cannot be decoded
    /// or contains invalid definitions.
    pub fn from_json(document: &str) -> Result<Self, ChecklistDomainError> {
        let decoded: Self = serde_json::from_str(document)
            .map_err(|error| ChecklistDomainError::InvalidCatalog(error.to_string()))?;
        Self::new(decoded.version, decoded.author, decoded.reviewer)
    }

    /// Returns the catalog format version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the author task definitions.
    #[must_use]
    pub fn author(&self) -> &[TaskDefinition] {
        &self.author
    }

    /// Returns the reviewer task definitions.
    #[must_use]
    pub fn reviewer(&self) -> &[TaskDefinition] {
        &self.reviewer
    }

    /// Builds fresh, unchecked task groups with visibility computed from the
    /// context.
    ///
    /// # Errors
    ///
    /// Returns a [`ChecklistDomainError`] when a definition is invalid.
    pub fn build(&self, context: CatalogContext<'_>) -> Result<ChecklistGroups, ChecklistDomainError> {
        Ok(ChecklistGroups {
            author: build_group(TaskRole::Author, &self.author, context.labels())?,
            reviewer: build_group(TaskRole::Reviewer, &self.reviewer, context.labels())?,
        })
    }
}

fn build_group(
    role: TaskRole,
    definitions: &[TaskDefinition],
    labels: &LabelSet,
) -> Result<TaskGroup, ChecklistDomainError> {
    let mut group = TaskGroup::new(role);
    for definition in definitions {
        group.push(definition.instantiate(labels)?)?;
    }
    Ok(group)
}

/// Builds the embedded catalog against the given context.
///
/// # Errors
///
/// Returns a [`ChecklistDomainError`] when the embedded catalog is invalid.
pub fn build_catalog(context: CatalogContext<'_>) -> Result<ChecklistGroups, ChecklistDomainError> {
    TaskCatalog::embedded()?.build(context)
}
