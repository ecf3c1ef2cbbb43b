use console::style;
use tracing::info;

use crate::error::{Result, StackError};
use crate::gh::PullRequestSource;
use crate::git::Vcs;
use crate::model::{MergeStrategy, OperationContext, PullRequest};
use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, Default)]
pub struct PopOptions {
    pub strategy: MergeStrategy,
    /// Delete the merged PR's remote branch afterwards
    pub delete_branch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopReport {
    /// Number of the merged PR
    pub merged: u64,
    /// PRs moved onto the default branch before the merge
    pub retargeted: Vec<u64>,
    /// Remote branch removed after the merge
    pub deleted_branch: Option<String>,
}

/// Merge the bottom PR of the stack into the default branch.
///
/// PRs based on the bottom branch are retargeted to the default branch
/// first, so deleting the merged branch cannot orphan them. Nothing is
/// changed unless the operator confirms.
pub fn pop(
    ctx: &OperationContext,
    vcs: &dyn Vcs,
    source: &dyn PullRequestSource,
    prompter: &dyn Prompter,
    options: PopOptions,
) -> Result<PopReport> {
    let bottom = ctx.stack.bottom().ok_or(StackError::EmptyStack)?;

    if bottom.base_branch != ctx.default_branch {
        return Err(StackError::BaseBranchMismatch {
            branch: bottom.branch.clone(),
            base: bottom.base_branch.clone(),
            default_branch: ctx.default_branch.clone(),
        });
    }

    // Every open PR on the bottom branch, including siblings outside the
    // checked-out branch's path
    let dependents: Vec<&PullRequest> = ctx
        .pull_requests
        .iter()
        .filter(|pr| pr.base_branch == bottom.branch && pr.number != bottom.number)
        .collect();

    println!(
        "\n🚀 Popping #{} {}",
        style(bottom.number).yellow(),
        style(&bottom.title).bold()
    );
    for pr in &dependents {
        println!(
            "  {} #{} will target {}",
            style("→").dim(),
            pr.number,
            style(&ctx.default_branch).cyan()
        );
    }

    let question = format!(
        "Merge PR #{} ({}) into {}?",
        bottom.number, bottom.branch, ctx.default_branch
    );
    if !prompter.confirm(&question)? {
        println!("\n{}", style("✗ Operation cancelled").red());
        return Err(StackError::Declined);
    }

    let mut retargeted = Vec::new();
    for pr in dependents {
        source.edit_base(pr.number, &ctx.default_branch)?;
        println!(
            "  {} #{} now targets {}",
            style("✓").green(),
            pr.number,
            ctx.default_branch
        );
        retargeted.push(pr.number);
    }

    println!("\n🔀 Merging PR #{}...", bottom.number);
    source.merge(bottom.number, options.strategy)?;
    println!("  {} Merged", style("✓").green());
    info!(number = bottom.number, "popped bottom of stack");

    let deleted_branch = if options.delete_branch {
        vcs.delete_remote_branch(&ctx.remote, &bottom.branch)?;
        println!("  {} Deleted {}/{}", style("✓").green(), ctx.remote, bottom.branch);
        Some(bottom.branch.clone())
    } else {
        None
    };

    Ok(PopReport {
        merged: bottom.number,
        retargeted,
        deleted_branch,
    })
}
