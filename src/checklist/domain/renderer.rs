//! Rendering of task groups into the canonical checklist comment body.

use minijinja::{Environment, context};

use super::layout::{self, AUTHOR_SECTION_TITLE, CHECKLIST_TITLE, REVIEWER_SECTION_TITLE};
use super::{ChecklistDomainError, TaskGroup};

const CHECKLIST_TEMPLATE: &str = concat!(
    "{{ title }}\n",
    "\n",
    "{{ author_title }}\n",
    "{% for line in author_lines %}{{ line }}\n{% endfor %}",
    "\n",
    "{{ reviewer_title }}\n",
    "{% for line in reviewer_lines %}{{ line }}\n{% endfor %}",
);

/// Renders the checklist comment body.
///
/// Only visible tasks are emitted, in group order, each carrying its `[name]`
/// suffix. Section titles are emitted even when a group has no visible tasks.
///
/// # Errors
///
/// Returns [`ChecklistDomainError::Render`] when the template fails to render.
pub fn render(author: &TaskGroup, reviewer: &TaskGroup) -> Result<String, ChecklistDomainError> {
    let environment = Environment::new();
    environment
        .render_str(
            CHECKLIST_TEMPLATE,
            context! {
                title => CHECKLIST_TITLE,
                author_title => AUTHOR_SECTION_TITLE,
                author_lines => visible_lines(author),
                reviewer_title => REVIEWER_SECTION_TITLE,
                reviewer_lines => visible_lines(reviewer),
            },
        )
        .map_err(|error| ChecklistDomainError::Render(error.to_string()))
}

fn visible_lines(group: &TaskGroup) -> Vec<String> {
    group
        .visible_tasks()
        .map(|task| {
            layout::checkbox_line(task.is_checked(), task.description(), task.name().as_str())
        })
        .collect()
}
