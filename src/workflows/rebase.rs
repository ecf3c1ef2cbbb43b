use console::style;
use tracing::info;

use crate::error::{Result, StackError};
use crate::git::{PullOutcome, RebaseOutcome, Vcs};
use crate::model::OperationContext;

/// Branches rebased, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebaseReport {
    pub rebased: Vec<String>,
}

/// Rebase every PR of the stack onto its base and force-push it.
///
/// PRs are processed bottom-up so a base is always rebased and pushed
/// before the branches built on it. The first divergence or conflict stops
/// the whole chain: PRs already processed stay rebased, and the working copy
/// is left on the failing branch. On success the original branch is checked
/// out again.
pub fn rebase_stack(ctx: &OperationContext, vcs: &dyn Vcs) -> Result<RebaseReport> {
    let mut report = RebaseReport::default();

    if ctx.stack.is_empty() {
        println!("{}", style("No pull requests in stack, nothing to rebase").dim());
        return Ok(report);
    }

    if !vcs.is_clean()? {
        return Err(StackError::DirtyWorkingCopy);
    }

    for pr in ctx.stack.bottom_up() {
        println!(
            "\n🔄 Rebasing {} onto {}...",
            style(&pr.branch).cyan(),
            style(&pr.base_branch).cyan()
        );

        vcs.switch(&pr.branch)?;

        if vcs.pull()? == PullOutcome::Diverged {
            return Err(StackError::DivergentBranches(pr.branch.clone()));
        }

        if vcs.pull_rebase(&ctx.remote, &pr.base_branch)? == RebaseOutcome::Conflicts {
            return Err(StackError::MergeConflicts(pr.branch.clone()));
        }

        vcs.push_force(&ctx.remote, &pr.branch)?;

        info!(branch = %pr.branch, base = %pr.base_branch, "rebased and pushed");
        println!("  {} Rebased and pushed #{}", style("✓").green(), pr.number);
        report.rebased.push(pr.branch.clone());
    }

    vcs.switch(&ctx.original_branch)?;

    Ok(report)
}
