//! When steps for checklist gate BDD scenarios.

use super::world::{GateWorld, run_async};
use checklist_gate::checklist::domain::{PullRequestNumber, TriggerEvent};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the checklist gate runs for the pull request")]
fn gate_runs_for_pull_request(world: &mut GateWorld) -> Result<(), eyre::Report> {
    let event = TriggerEvent::PullRequest(world.pull_request()?.clone());
    world.last_result = Some(run_async(world.service.run(&event)));
    Ok(())
}

#[when("a comment on issue #{number:u64} that is not a pull request triggers the gate")]
fn plain_issue_comment_triggers_gate(
    world: &mut GateWorld,
    number: u64,
) -> Result<(), eyre::Report> {
    let event = TriggerEvent::IssueComment {
        issue_number: PullRequestNumber::new(number).wrap_err("construct issue number")?,
        is_pull_request: false,
    };
    world.last_result = Some(run_async(world.service.run(&event)));
    Ok(())
}
