use console::style;
use tracing::info;

use crate::error::{Result, StackError};
use crate::gh::PullRequestSource;
use crate::git::Vcs;
use crate::model::{Commit, OperationContext};
use crate::prompt::Prompter;

#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Commit (full or abbreviated oid) that ends the split-off PR
    pub commit: Option<String>,
    /// Name of the branch for the split-off PR
    pub branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Branch holding the commits split off
    pub new_branch: String,
    /// URL of the split-off PR
    pub url: String,
    /// Commit the split happened at
    pub commit: Commit,
}

/// Split the current PR in two at a commit.
///
/// The commits up to and including the chosen one move to a new branch and
/// PR targeting the original base; the original PR is then retargeted onto
/// the new branch, so it sits right above the new PR in the stack.
pub fn split(
    ctx: &OperationContext,
    vcs: &dyn Vcs,
    source: &dyn PullRequestSource,
    prompter: &dyn Prompter,
    options: SplitOptions,
) -> Result<SplitReport> {
    let pr = ctx
        .current_pull_request
        .as_ref()
        .ok_or_else(|| StackError::NoPullRequestOnBranch(ctx.original_branch.clone()))?;

    if !vcs.is_clean()? {
        return Err(StackError::DirtyWorkingCopy);
    }

    let commits = source.commits(pr.number)?;
    if commits.len() < 2 {
        return Err(StackError::NothingToSplit {
            number: pr.number,
            count: commits.len(),
        });
    }

    // Splitting at the head commit would leave the original PR empty
    let split_points = &commits[..commits.len() - 1];

    let commit = match options.commit {
        Some(oid) => find_commit(&commits, split_points, &oid)?,
        None => {
            let items: Vec<String> = split_points
                .iter()
                .map(|c| format!("{} {}", c.short_oid(), c.title))
                .collect();
            let index = prompter.select("Split after commit", &items)?;
            split_points
                .get(index)
                .ok_or_else(|| StackError::UnknownCommit(index.to_string()))?
        }
    };

    let new_branch = match options.branch {
        Some(branch) => branch,
        None => prompter.input("Name of the new branch", &format!("{}-split", pr.branch))?,
    };

    println!(
        "\n✂️  Splitting #{} after {} into {}",
        pr.number,
        style(commit.short_oid()).yellow(),
        style(&new_branch).cyan()
    );

    vcs.checkout_detached(&commit.oid)?;
    vcs.create_branch(&new_branch)?;
    vcs.publish_branch(&ctx.remote, &new_branch)?;

    let url = source.create(&pr.base_branch)?;
    println!("  {} Created {}", style("✓").green(), style(&url).cyan().underlined());

    source.edit_base(pr.number, &new_branch)?;
    println!(
        "  {} #{} now targets {}",
        style("✓").green(),
        pr.number,
        style(&new_branch).cyan()
    );

    info!(number = pr.number, branch = %new_branch, "split pull request");

    Ok(SplitReport {
        new_branch,
        url,
        commit: commit.clone(),
    })
}

/// Resolve a full or abbreviated oid among the allowed split points
fn find_commit<'a>(all: &[Commit], split_points: &'a [Commit], oid: &str) -> Result<&'a Commit> {
    let oid = oid.trim();
    if oid.is_empty() {
        return Err(StackError::UnknownCommit(oid.to_string()));
    }

    let matches = all.iter().filter(|c| c.oid.starts_with(oid)).count();
    if matches > 1 {
        return Err(StackError::AmbiguousCommit(oid.to_string()));
    }

    if let Some(commit) = split_points.iter().find(|c| c.oid.starts_with(oid)) {
        return Ok(commit);
    }

    match all.last() {
        Some(head) if head.oid.starts_with(oid) => Err(StackError::SplitAtHead(oid.to_string())),
        _ => Err(StackError::UnknownCommit(oid.to_string())),
    }
}
