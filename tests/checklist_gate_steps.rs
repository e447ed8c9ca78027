//! Behaviour tests for the workflow checklist gate.

mod checklist_steps;

use checklist_steps::world::{GateWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/checklist_gate.feature",
    name = "Fresh pull request receives an unchecked checklist"
)]
#[tokio::test(flavor = "multi_thread")]
async fn fresh_pull_request(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/checklist_gate.feature",
    name = "Ticked tasks survive a re-run and complete the check"
)]
#[tokio::test(flavor = "multi_thread")]
async fn ticked_tasks_survive(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/checklist_gate.feature",
    name = "Override label hides the regression task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn override_label_hides_task(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/checklist_gate.feature",
    name = "Unchecked box in a reviewer comment keeps the check pending"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reviewer_checklist_gates_check(world: GateWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/checklist_gate.feature",
    name = "Comment on a plain issue does nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn plain_issue_comment_is_ignored(world: GateWorld) {
    let _ = world;
}
