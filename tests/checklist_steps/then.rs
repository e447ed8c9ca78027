//! Then steps for checklist gate BDD scenarios.

use super::world::{GateWorld, regression_line};
use checklist_gate::checklist::{
    domain::{CheckRunConclusion, CheckRunStatus, IssueComment},
    services::GateOutcome,
};
use rstest_bdd_macros::then;

fn checklist_body(world: &GateWorld) -> Result<String, eyre::Report> {
    let number = world.pull_request()?.number();
    let comments = world
        .host
        .comments(number)
        .map_err(|err| eyre::eyre!("read comments: {err}"))?;
    comments
        .iter()
        .find(|comment| comment.is_checklist())
        .map(|comment| comment.body().to_owned())
        .ok_or_else(|| eyre::eyre!("no checklist comment was published"))
}

fn expect_regression_line(world: &GateWorld, checked: bool) -> Result<(), eyre::Report> {
    let body = checklist_body(world)?;
    let occurrences = body.matches(&regression_line(checked)).count();
    if occurrences != 2 {
        return Err(eyre::eyre!(
            "expected the regression line in both sections, found {occurrences} in:\n{body}"
        ));
    }
    Ok(())
}

#[then("the regression task is unchecked in both sections")]
fn regression_task_unchecked(world: &GateWorld) -> Result<(), eyre::Report> {
    expect_regression_line(world, false)
}

#[then("the regression task is checked in both sections")]
fn regression_task_checked(world: &GateWorld) -> Result<(), eyre::Report> {
    expect_regression_line(world, true)
}

#[then("the checklist omits the regression task")]
fn regression_task_omitted(world: &GateWorld) -> Result<(), eyre::Report> {
    let body = checklist_body(world)?;
    if body.contains("[qa-task]") {
        return Err(eyre::eyre!("expected no regression task, found:\n{body}"));
    }
    Ok(())
}

#[then("the checklist comment was updated in place")]
fn checklist_updated_in_place(world: &GateWorld) -> Result<(), eyre::Report> {
    let number = world.pull_request()?.number();
    let comments = world
        .host
        .comments(number)
        .map_err(|err| eyre::eyre!("read comments: {err}"))?;
    let checklists: Vec<&IssueComment> = comments
        .iter()
        .filter(|comment| comment.is_checklist())
        .collect();
    let [only] = checklists.as_slice() else {
        return Err(eyre::eyre!(
            "expected exactly one checklist comment, found {}",
            checklists.len()
        ));
    };
    if Some(only.id()) != world.prior_checklist {
        return Err(eyre::eyre!("checklist comment was recreated instead of updated"));
    }
    Ok(())
}

#[then("the check run is pending")]
fn check_run_pending(world: &GateWorld) -> Result<(), eyre::Report> {
    let check_runs = world
        .host
        .check_runs()
        .map_err(|err| eyre::eyre!("read check runs: {err}"))?;
    let check_run = check_runs
        .last()
        .ok_or_else(|| eyre::eyre!("no check run was submitted"))?;
    if check_run.status != CheckRunStatus::InProgress || check_run.conclusion.is_some() {
        return Err(eyre::eyre!("expected a pending check run, got {check_run:?}"));
    }
    Ok(())
}

#[then("the check run completed successfully")]
fn check_run_succeeded(world: &GateWorld) -> Result<(), eyre::Report> {
    let check_runs = world
        .host
        .check_runs()
        .map_err(|err| eyre::eyre!("read check runs: {err}"))?;
    let check_run = check_runs
        .last()
        .ok_or_else(|| eyre::eyre!("no check run was submitted"))?;
    if check_run.status != CheckRunStatus::Completed
        || check_run.conclusion != Some(CheckRunConclusion::Success)
        || check_run.completed_at.is_none()
    {
        return Err(eyre::eyre!("expected a successful check run, got {check_run:?}"));
    }
    Ok(())
}

#[then("the run is skipped")]
fn run_is_skipped(world: &GateWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing gate result in scenario world"))?;
    if !matches!(result, Ok(GateOutcome::Skipped(_))) {
        return Err(eyre::eyre!("expected a skipped run, got {result:?}"));
    }
    Ok(())
}

#[then("no comment or check run was created")]
fn nothing_created(world: &GateWorld) -> Result<(), eyre::Report> {
    let number = world.pull_request()?.number();
    let comments = world
        .host
        .comments(number)
        .map_err(|err| eyre::eyre!("read comments: {err}"))?;
    let check_runs = world
        .host
        .check_runs()
        .map_err(|err| eyre::eyre!("read check runs: {err}"))?;
    if !comments.is_empty() || !check_runs.is_empty() {
        return Err(eyre::eyre!(
            "expected no side effects, found {} comments and {} check runs",
            comments.len(),
            check_runs.len()
        ));
    }
    Ok(())
}
