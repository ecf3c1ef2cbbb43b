use pr_stack::error::StackError;
use pr_stack::workflows::push::candidates;
use pr_stack::workflows::push;

use crate::common::{MockSource, MockVcs, ScriptedPrompter, context, pr};

#[test]
fn test_candidates_exclude_the_current_branch() {
    let ctx = context(
        "new-work",
        vec![pr(1, "feature-a", "main"), pr(2, "feature-b", "feature-a")],
    );
    let numbers: Vec<u64> = candidates(&ctx).iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn test_push_onto_requested_pr() {
    let ctx = context(
        "new-work",
        vec![pr(1, "feature-a", "main"), pr(2, "feature-b", "feature-a")],
    );
    let vcs = MockVcs::on("new-work");
    let source = MockSource::new();
    let prompter = ScriptedPrompter::answering(true);

    let report = push(&ctx, &vcs, &source, &prompter, Some(2)).unwrap();

    assert_eq!(report.base.number, 2);
    assert_eq!(report.url, "https://github.com/acme/widgets/pull/100");
    assert_eq!(vcs.calls(), vec!["publish origin/new-work"]);
    assert_eq!(source.calls(), vec!["create onto feature-b"]);
    assert!(prompter.asked().is_empty());
}

#[test]
fn test_push_asks_for_a_base_when_none_is_given() {
    let ctx = context(
        "new-work",
        vec![pr(1, "feature-a", "main"), pr(2, "feature-b", "feature-a")],
    );
    let vcs = MockVcs::on("new-work");
    let source = MockSource::new();
    let prompter = ScriptedPrompter::answering(true).selecting(0);

    let report = push(&ctx, &vcs, &source, &prompter, None).unwrap();

    assert_eq!(report.base.branch, "feature-a");
    assert_eq!(source.calls(), vec!["create onto feature-a"]);
    let asked = prompter.asked();
    assert_eq!(asked.len(), 1);
    assert!(asked[0].contains("#1 Change 1 (feature-a)"));
}

#[test]
fn test_push_rejects_unknown_pr_number() {
    let ctx = context("new-work", vec![pr(1, "feature-a", "main")]);
    let vcs = MockVcs::on("new-work");
    let source = MockSource::new();

    let err = push(
        &ctx,
        &vcs,
        &source,
        &ScriptedPrompter::answering(true),
        Some(9),
    )
    .unwrap_err();

    assert!(matches!(err, StackError::InvalidCandidateBase(9)));
    assert!(vcs.calls().is_empty());
    assert!(source.calls().is_empty());
}

#[test]
fn test_push_refuses_a_branch_that_already_has_a_pr() {
    let ctx = context(
        "feature-a",
        vec![pr(1, "feature-a", "main"), pr(2, "feature-b", "main")],
    );

    let err = push(
        &ctx,
        &MockVcs::on("feature-a"),
        &MockSource::new(),
        &ScriptedPrompter::answering(true),
        Some(2),
    )
    .unwrap_err();

    assert!(matches!(err, StackError::AlreadyStacked(ref b) if b == "feature-a"));
}

#[test]
fn test_push_refuses_a_branch_others_build_on() {
    let ctx = context("base-work", vec![pr(2, "feature-b", "base-work")]);

    let err = push(
        &ctx,
        &MockVcs::on("base-work"),
        &MockSource::new(),
        &ScriptedPrompter::answering(true),
        Some(2),
    )
    .unwrap_err();

    assert!(matches!(err, StackError::AlreadyStacked(_)));
}

#[test]
fn test_push_without_open_prs() {
    let ctx = context("new-work", vec![]);

    let err = push(
        &ctx,
        &MockVcs::on("new-work"),
        &MockSource::new(),
        &ScriptedPrompter::answering(true),
        None,
    )
    .unwrap_err();

    assert!(matches!(err, StackError::NoCandidateBase));
}
