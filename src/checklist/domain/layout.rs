//! Fixed markup shared by the checklist renderer and parser.
//!
//! These strings are the persisted format of the checklist comment. Changing
//! any of them breaks recovery of checked state from comments written by
//! earlier releases.

/// Top-level title; a comment whose body starts with it is the checklist.
pub const CHECKLIST_TITLE: &str = "## Workflow Checklist";

/// Title of the author section.
pub const AUTHOR_SECTION_TITLE: &str = "### Author Tasks";

/// Title of the reviewer section.
pub const REVIEWER_SECTION_TITLE: &str = "### Reviewer Tasks";

/// Marker whose presence in any comment means work is outstanding.
pub const UNCHECKED_MARKER: &str = "- [ ] ";

/// Formats one checkbox line with its recoverable name suffix.
#[must_use]
pub fn checkbox_line(checked: bool, description: &str, name: &str) -> String {
    let marker = if checked { 'x' } else { ' ' };
    format!("- [{marker}] {description} [{name}]")
}
