//! Checklist task and task group aggregates.

use super::ChecklistDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable task identifier carried in the `[name]` suffix of a checklist line.
///
/// Names are the durable key used to recover checked state between renders,
/// so they are restricted to characters that survive the bracketed suffix.
///
/// # Examples
///
///     use checklist_gate::checklist::domain::TaskName;
///
///     let name = TaskName::new("qa-task").expect("valid");
///     assert_eq!(name.as_str(), "qa-task");
///     assert!(TaskName::new("qa task").is_err());
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::InvalidTaskName`] when the name is empty
    /// or contains characters outside ASCII alphanumerics, `-` and `_`.
    pub fn new(value: impl Into<String>) -> Result<Self, ChecklistDomainError> {
        let raw = value.into();
        if !is_valid_task_name(&raw) {
            return Err(ChecklistDomainError::InvalidTaskName(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskName {
    type Error = ChecklistDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(value: TaskName) -> Self {
        value.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` when the value can be used as a task name.
pub(crate) fn is_valid_task_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}

/// Role a task group is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskRole {
    /// Tasks the pull request author answers.
    Author,
    /// Tasks the reviewer answers.
    Reviewer,
}

impl TaskRole {
    /// Returns the canonical lowercase role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Reviewer => "reviewer",
        }
    }
}

impl fmt::Display for TaskRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single checklist item.
///
/// Tasks are built fresh from the catalog on every run. Checked state is
/// recovered from the prior comment; visibility is always recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: TaskName,
    description: String,
    is_checked: bool,
    is_visible: bool,
}

impl Task {
    /// Creates an unchecked, visible task.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyTaskDescription`] when the
    /// description is blank and
    /// [`ChecklistDomainError::MultilineTaskDescription`] when it contains a
    /// line break.
    pub fn new(name: TaskName, description: impl Into<String>) -> Result<Self, ChecklistDomainError> {
        let raw = description.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChecklistDomainError::EmptyTaskDescription(
                name.as_str().to_owned(),
            ));
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(ChecklistDomainError::MultilineTaskDescription(
                name.as_str().to_owned(),
            ));
        }
        Ok(Self {
            name,
            description: trimmed.to_owned(),
            is_checked: false,
            is_visible: true,
        })
    }

    /// Returns the stable task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been ticked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// Returns whether the task is shown in the rendered checklist.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Sets the checked state.
    pub const fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    /// Returns the task with the given checked state.
    #[must_use]
    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.is_checked = checked;
        self
    }

    /// Returns the task with the given visibility.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }
}

/// Ordered, role-scoped collection of tasks.
///
/// Insertion order is render order. Names are unique within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    role: TaskRole,
    tasks: Vec<Task>,
}

impl TaskGroup {
    /// Creates an empty group for the given role.
    #[must_use]
    pub const fn new(role: TaskRole) -> Self {
        Self {
            role,
            tasks: Vec::new(),
        }
    }

    /// Appends a task to the end of the group.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::DuplicateTaskName`] when a task with the
    /// same name is already present.
    pub fn push(&mut self, task: Task) -> Result<(), ChecklistDomainError> {
        if self.get(task.name()).is_some() {
            return Err(ChecklistDomainError::DuplicateTaskName {
                role: self.role.as_str().to_owned(),
                name: task.name().as_str().to_owned(),
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Returns the group role.
    #[must_use]
    pub const fn role(&self) -> TaskRole {
        self.role
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns visible tasks in insertion order.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_visible())
    }

    /// Finds a task by name.
    #[must_use]
    pub fn get(&self, name: &TaskName) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name() == name)
    }

    /// Finds a task by raw name for in-place mutation.
    pub fn get_mut_by_str(&mut self, name: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.name().as_str() == name)
    }

    /// Returns the number of tasks, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the group holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
