use console::style;

use crate::error::{Result, StackError};
use crate::gh::PullRequestSource;
use crate::git::Vcs;
use crate::model::{OperationContext, PullRequest};
use crate::prompt::Prompter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    /// PR the new one was stacked on
    pub base: PullRequest,
    /// URL of the new PR
    pub url: String,
}

/// Open PRs the checked-out branch may be stacked on
pub fn candidates(ctx: &OperationContext) -> Vec<&PullRequest> {
    ctx.pull_requests
        .iter()
        .filter(|pr| pr.branch != ctx.original_branch)
        .collect()
}

/// Stack the checked-out branch on top of another PR by opening a new PR
/// against that PR's branch.
///
/// `requested` picks the base PR by number; otherwise the operator chooses.
pub fn push(
    ctx: &OperationContext,
    vcs: &dyn Vcs,
    source: &dyn PullRequestSource,
    prompter: &dyn Prompter,
    requested: Option<u64>,
) -> Result<PushReport> {
    if ctx.current_pull_request.is_some() || !ctx.stack.is_empty() {
        return Err(StackError::AlreadyStacked(ctx.original_branch.clone()));
    }

    let candidates = candidates(ctx);
    if candidates.is_empty() {
        return Err(StackError::NoCandidateBase);
    }

    let base = match requested {
        Some(number) => candidates
            .iter()
            .find(|pr| pr.number == number)
            .copied()
            .ok_or(StackError::InvalidCandidateBase(number))?,
        None => {
            let items: Vec<String> = candidates
                .iter()
                .map(|pr| format!("#{} {} ({})", pr.number, pr.title, pr.branch))
                .collect();
            let index = prompter.select("Stack on top of", &items)?;
            candidates
                .get(index)
                .copied()
                .ok_or(StackError::NoCandidateBase)?
        }
    };

    println!(
        "\n📤 Stacking {} on #{} {}",
        style(&ctx.original_branch).cyan(),
        base.number,
        style(&base.branch).cyan()
    );

    vcs.publish_branch(&ctx.remote, &ctx.original_branch)?;
    let url = source.create(&base.branch)?;

    println!("  {} Created {}", style("✓").green(), style(&url).cyan().underlined());

    Ok(PushReport {
        base: base.clone(),
        url,
    })
}
