use pr_stack::error::StackError;
use pr_stack::workflows::rebase_stack;

use crate::common::{MockVcs, context, pr};

/// feature-a → feature-b → feature-c → main
fn linear() -> Vec<pr_stack::model::PullRequest> {
    vec![
        pr(3, "feature-a", "feature-b"),
        pr(2, "feature-b", "feature-c"),
        pr(1, "feature-c", "main"),
    ]
}

#[test]
fn test_rebase_processes_bottom_up_and_returns_to_original_branch() {
    let ctx = context("feature-b", linear());
    let vcs = MockVcs::on("feature-b");

    let report = rebase_stack(&ctx, &vcs).unwrap();

    assert_eq!(report.rebased, vec!["feature-c", "feature-b", "feature-a"]);
    assert_eq!(
        vcs.calls(),
        vec![
            "switch feature-c",
            "pull feature-c",
            "pull_rebase feature-c onto origin/main",
            "push_force origin/feature-c",
            "switch feature-b",
            "pull feature-b",
            "pull_rebase feature-b onto origin/feature-c",
            "push_force origin/feature-b",
            "switch feature-a",
            "pull feature-a",
            "pull_rebase feature-a onto origin/feature-b",
            "push_force origin/feature-a",
            "switch feature-b",
        ]
    );
    assert_eq!(vcs.current(), "feature-b");
}

#[test]
fn test_divergence_stops_the_chain_and_leaves_the_failing_branch_checked_out() {
    let ctx = context("feature-a", linear());
    let vcs = MockVcs::on("feature-a").diverged_on("feature-b");

    let err = rebase_stack(&ctx, &vcs).unwrap_err();

    assert!(matches!(err, StackError::DivergentBranches(ref b) if b == "feature-b"));
    assert!(err.needs_manual_resolution());
    let calls = vcs.calls();
    assert!(calls.contains(&"push_force origin/feature-c".to_string()));
    assert!(!calls.iter().any(|c| c.contains("feature-a")));
    assert!(!calls.contains(&"pull_rebase feature-b onto origin/feature-c".to_string()));
    assert_eq!(vcs.current(), "feature-b");
}

#[test]
fn test_conflicts_stop_before_pushing() {
    let ctx = context("feature-c", linear());
    let vcs = MockVcs::on("feature-c").conflicted_on("feature-c");

    let err = rebase_stack(&ctx, &vcs).unwrap_err();

    assert!(matches!(err, StackError::MergeConflicts(ref b) if b == "feature-c"));
    assert_eq!(
        vcs.calls(),
        vec![
            "switch feature-c",
            "pull feature-c",
            "pull_rebase feature-c onto origin/main",
        ]
    );
}

#[test]
fn test_branching_stack_rebases_every_base_before_its_dependents() {
    // feature-x and feature-y both sit on feature-base
    let ctx = context(
        "feature-base",
        vec![
            pr(11, "feature-x", "feature-base"),
            pr(12, "feature-y", "feature-base"),
            pr(10, "feature-base", "main"),
            pr(13, "feature-x2", "feature-x"),
        ],
    );
    let vcs = MockVcs::on("feature-base");

    let report = rebase_stack(&ctx, &vcs).unwrap();

    let position = |branch: &str| report.rebased.iter().position(|b| b == branch).unwrap();
    assert_eq!(report.rebased.len(), 4);
    assert_eq!(position("feature-base"), 0);
    assert!(position("feature-x") < position("feature-x2"));
}

#[test]
fn test_empty_stack_does_nothing() {
    let ctx = context("lonely", vec![pr(1, "other", "main")]);
    let vcs = MockVcs::on("lonely").dirty();

    let report = rebase_stack(&ctx, &vcs).unwrap();

    assert!(report.rebased.is_empty());
    assert!(vcs.calls().is_empty());
}

#[test]
fn test_dirty_working_copy_is_refused() {
    let ctx = context("feature-a", linear());
    let vcs = MockVcs::on("feature-a").dirty();

    assert!(matches!(
        rebase_stack(&ctx, &vcs),
        Err(StackError::DirtyWorkingCopy)
    ));
    assert!(vcs.calls().is_empty());
}
