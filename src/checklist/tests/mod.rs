//! Unit tests for checklist reconciliation.

mod catalog_tests;

use crate::checklist::domain::{Label, LabelSet, TaskName};

/// Description of the regression-risk task in the embedded catalog.
pub(super) const QA_DESCRIPTION: &str = "I am sure that there is no possibility of a regression in this code (Otherwise add label `qa-needed`)";

/// Builds a label set from raw names.
pub(super) fn labels(names: &[&str]) -> LabelSet {
    names
        .iter()
        .map(|name| Label::new(*name).expect("valid label"))
        .collect()
}

/// Builds a task name.
pub(super) fn task_name(name: &str) -> TaskName {
    TaskName::new(name).expect("valid task name")
}

/// Renders the body the embedded catalog produces for the given states.
pub(super) fn qa_body(author_checked: bool, reviewer_checked: bool) -> String {
    let marker = |checked: bool| if checked { 'x' } else { ' ' };
    format!(
        "## Workflow Checklist\n\n### Author Tasks\n- [{}] {QA_DESCRIPTION} [qa-task]\n\n### Reviewer Tasks\n- [{}] {QA_DESCRIPTION} [qa-task]\n",
        marker(author_checked),
        marker(reviewer_checked),
    )
}
