//! Tests for the task catalog and visibility rules.

use super::{QA_DESCRIPTION, labels, task_name};
use crate::checklist::domain::{
    CatalogContext, ChecklistDomainError, TaskCatalog, TaskDefinition, TaskRole, VisibilityRule,
    build_catalog,
};
use rstest::rstest;

#[rstest]
fn embedded_catalog_lists_qa_task_for_both_roles() {
    let catalog = TaskCatalog::embedded().expect("embedded catalog is valid");

    assert_eq!(catalog.version(), 1);
    for definitions in [catalog.author(), catalog.reviewer()] {
        let [definition] = definitions else {
            panic!("expected exactly one definition, found {definitions:?}");
        };
        assert_eq!(definition.name, task_name("qa-task"));
        assert_eq!(definition.description, QA_DESCRIPTION);
        assert_eq!(
            definition.visibility,
            VisibilityRule::HiddenWhenLabel("qa-needed".to_owned())
        );
    }
}

#[rstest]
#[case::no_labels(&[])]
#[case::unrelated_labels(&["bug", "documentation"])]
fn tasks_are_visible_unless_override_label_applied(#[case] applied: &[&str]) {
    let label_set = labels(applied);
    let groups = build_catalog(CatalogContext::new(&label_set)).expect("catalog builds");

    assert_eq!(groups.author.role(), TaskRole::Author);
    assert_eq!(groups.reviewer.role(), TaskRole::Reviewer);
    for group in [&groups.author, &groups.reviewer] {
        assert!(!group.is_empty());
        assert!(group.tasks().iter().all(|task| task.is_visible()));
        assert!(group.tasks().iter().all(|task| !task.is_checked()));
    }
}

#[rstest]
fn override_label_hides_only_targeted_tasks() {
    let catalog = TaskCatalog::new(
        1,
        vec![
            TaskDefinition::new(task_name("qa-task"), "No regression risk")
                .hidden_when_label("qa-needed"),
            TaskDefinition::new(task_name("docs"), "Docs updated"),
        ],
        vec![
            TaskDefinition::new(task_name("changelog"), "Changelog entry")
                .hidden_when_label("skip-changelog"),
        ],
    )
    .expect("valid catalog");
    let label_set = labels(&["qa-needed"]);

    let groups = catalog
        .build(CatalogContext::new(&label_set))
        .expect("catalog builds");

    let author: Vec<_> = groups
        .author
        .tasks()
        .iter()
        .map(|task| (task.name().as_str(), task.is_visible()))
        .collect();
    assert_eq!(author, vec![("qa-task", false), ("docs", true)]);
    assert_eq!(groups.reviewer.visible_tasks().count(), 1);
}

#[rstest]
fn duplicate_names_within_a_group_are_rejected() {
    let result = TaskCatalog::new(
        1,
        vec![
            TaskDefinition::new(task_name("qa-task"), "First"),
            TaskDefinition::new(task_name("qa-task"), "Second"),
        ],
        Vec::new(),
    );

    assert_eq!(
        result,
        Err(ChecklistDomainError::DuplicateTaskName {
            role: "author".to_owned(),
            name: "qa-task".to_owned(),
        })
    );
}

#[rstest]
fn catalog_document_with_invalid_name_is_rejected() {
    let document = r#"{
        "version": 2,
        "author": [{ "name": "has space", "description": "Broken" }],
        "reviewer": []
    }"#;

    let result = TaskCatalog::from_json(document);

    assert!(matches!(result, Err(ChecklistDomainError::InvalidCatalog(_))));
}

#[rstest]
fn catalog_document_defaults_visibility_to_always() {
    let document = r#"{
        "version": 2,
        "author": [{ "name": "docs", "description": "Docs updated" }],
        "reviewer": []
    }"#;

    let catalog = TaskCatalog::from_json(document).expect("valid document");

    assert_eq!(catalog.version(), 2);
    assert_eq!(
        catalog.author().first().map(|definition| &definition.visibility),
        Some(&VisibilityRule::Always)
    );
}

#[rstest]
fn blank_descriptions_are_rejected() {
    let result = TaskCatalog::new(
        1,
        Vec::new(),
        vec![TaskDefinition::new(task_name("review"), "   ")],
    );

    assert_eq!(
        result,
        Err(ChecklistDomainError::EmptyTaskDescription("review".to_owned()))
    );
}

#[rstest]
#[case::line_feed(r#""first line\nsecond line""#)]
#[case::carriage_return(r#""first line\r\nsecond line""#)]
fn catalog_document_with_multiline_description_is_rejected(#[case] description: &str) {
    let document = format!(
        r#"{{
        "version": 2,
        "author": [{{ "name": "multi", "description": {description} }}],
        "reviewer": []
    }}"#
    );

    let result = TaskCatalog::from_json(&document);

    assert_eq!(
        result,
        Err(ChecklistDomainError::MultilineTaskDescription(
            "multi".to_owned()
        ))
    );
}
