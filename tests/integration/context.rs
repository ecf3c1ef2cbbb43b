use pr_stack::model::{Config, OperationContext};

use crate::common::{MockSource, MockVcs, pr};

#[test]
fn test_resolve_builds_the_stack_of_the_checked_out_branch() {
    let source = MockSource {
        pull_requests: vec![
            pr(3, "feature-a", "feature-b"),
            pr(2, "feature-b", "feature-c"),
            pr(1, "feature-c", "main"),
            pr(9, "unrelated", "main"),
        ],
        ..MockSource::new()
    };
    let vcs = MockVcs::on("feature-b");

    let ctx = OperationContext::resolve(&Config::default(), &vcs, &source).unwrap();

    assert_eq!(ctx.original_branch, "feature-b");
    assert_eq!(ctx.default_branch, "main");
    assert_eq!(ctx.pull_requests.len(), 4);
    assert_eq!(ctx.current_pull_request.as_ref().map(|pr| pr.number), Some(2));

    let top_down: Vec<&str> = ctx.stack.top_down().map(|pr| pr.branch.as_str()).collect();
    assert_eq!(top_down, vec!["feature-a", "feature-b", "feature-c"]);
    assert_eq!(ctx.stack.bottom().map(|pr| pr.number), Some(1));

    let current: Vec<u64> = ctx
        .stack
        .top_down()
        .filter(|pr| pr.is_current)
        .map(|pr| pr.number)
        .collect();
    assert_eq!(current, vec![2]);
}

#[test]
fn test_resolve_on_a_branch_without_prs() {
    let source = MockSource {
        pull_requests: vec![pr(1, "feature-c", "main")],
        ..MockSource::new()
    };

    let ctx = OperationContext::resolve(&Config::default(), &MockVcs::on("scratch"), &source)
        .unwrap();

    assert!(ctx.current_pull_request.is_none());
    assert!(ctx.stack.is_empty());
}
