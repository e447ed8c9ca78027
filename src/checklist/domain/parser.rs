//! Recovery of checked state from a previously rendered checklist.
//!
//! Parsing never fails. Lines that do not look like checkbox lines, names
//! that are not in the current catalog, and missing section titles are all
//! skipped so that hand-edited comments degrade to "nothing recoverable".

use std::collections::HashSet;

use super::layout::{AUTHOR_SECTION_TITLE, REVIEWER_SECTION_TITLE};
use super::task::is_valid_task_name;
use super::TaskGroup;

/// A checkbox line recognised inside a checklist section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxLine<'a> {
    /// Whether the box is ticked.
    pub checked: bool,
    /// Description text between the marker and the name suffix.
    pub description: &'a str,
    /// Task name carried in the trailing `[name]` token.
    pub name: &'a str,
}

impl<'a> CheckboxLine<'a> {
    /// Parses `- [ ] description [name]` or `- [x] description [name]`.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        let after_bullet = trimmed
            .strip_prefix("- [")
            .or_else(|| trimmed.strip_prefix("* ["))?;

        let mut characters = after_bullet.chars();
        let checked = match characters.next()? {
            ' ' => false,
            'x' | 'X' => true,
            _ => return None,
        };
        let remainder = characters.as_str().strip_prefix("] ")?;
        let (description, name) = remainder.strip_suffix(']')?.rsplit_once(" [")?;

        if description.trim().is_empty() || !is_valid_task_name(name) {
            return None;
        }
        Some(Self {
            checked,
            description: description.trim(),
            name,
        })
    }
}

/// Copies checked state from a prior checklist body onto the task groups.
///
/// A `None` body leaves every task unchecked. For each section only the
/// first line carrying a given name is honoured; later duplicates are
/// ignored.
pub fn parse_prior_state(body: Option<&str>, author: &mut TaskGroup, reviewer: &mut TaskGroup) {
    let Some(text) = body else {
        return;
    };

    if let Some(span) = author_span(text) {
        apply_span(span, author);
    }
    if let Some(span) = reviewer_span(text) {
        apply_span(span, reviewer);
    }
}

fn author_span(text: &str) -> Option<&str> {
    let (_, after_title) = text.split_once(AUTHOR_SECTION_TITLE)?;
    let (span, _) = after_title.split_once(REVIEWER_SECTION_TITLE)?;
    Some(span)
}

fn reviewer_span(text: &str) -> Option<&str> {
    text.split_once(REVIEWER_SECTION_TITLE)
        .map(|(_, span)| span)
}

fn apply_span(span: &str, group: &mut TaskGroup) {
    let mut seen = HashSet::new();
    for line in span.lines().filter_map(CheckboxLine::parse) {
        if !seen.insert(line.name) {
            continue;
        }
        if let Some(task) = group.get_mut_by_str(line.name) {
            task.set_checked(line.checked);
        }
    }
}
