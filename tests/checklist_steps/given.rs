//! Given steps for checklist gate BDD scenarios.

use super::world::{GateWorld, regression_line};
use checklist_gate::checklist::domain::{Label, PullRequest};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a pull request #{number:u64} at head "{head_sha}""#)]
fn pull_request_at_head(
    world: &mut GateWorld,
    number: u64,
    head_sha: String,
) -> Result<(), eyre::Report> {
    let pull_request =
        PullRequest::from_parts(number, &head_sha).wrap_err("construct pull request")?;
    world
        .host
        .add_pull_request(pull_request.clone())
        .wrap_err("register pull request")?;
    world.pull_request = Some(pull_request);
    Ok(())
}

#[given("the pull request has a checklist with the regression task ticked")]
fn checklist_with_ticked_task(world: &mut GateWorld) -> Result<(), eyre::Report> {
    let number = world.pull_request()?.number();
    let body = format!(
        "## Workflow Checklist\n\n### Author Tasks\n{line}\n\n### Reviewer Tasks\n{line}\n",
        line = regression_line(true)
    );
    let id = world
        .host
        .add_comment(number, body)
        .wrap_err("add prior checklist")?;
    world.prior_checklist = Some(id);
    Ok(())
}

#[given(r#"the pull request has the label "{label}""#)]
fn pull_request_has_label(world: &mut GateWorld, label: String) -> Result<(), eyre::Report> {
    let number = world.pull_request()?.number();
    world
        .host
        .add_label(number, Label::new(label).wrap_err("construct label")?)
        .wrap_err("apply label")?;
    Ok(())
}

#[given("a reviewer left a comment with an unchecked box")]
fn reviewer_comment_with_unchecked_box(world: &mut GateWorld) -> Result<(), eyre::Report> {
    let number = world.pull_request()?.number();
    world
        .host
        .add_comment(number, "Before merging:\n- [ ] run the migration locally\n")
        .wrap_err("add reviewer comment")?;
    Ok(())
}
