use anyhow::Result;
use console::style;

use super::Session;
use crate::error::StackError;
use crate::workflows;

pub fn rebase() -> Result<()> {
    let session = Session::open()?;
    let ctx = session.context()?;

    let report = match workflows::rebase_stack(&ctx, &session.git) {
        Ok(report) => report,
        Err(e) => {
            if let Some(hint) = recovery_hint(&e, &ctx.original_branch) {
                eprintln!("\n{} {}", style("💡").yellow(), hint);
            }
            return Err(e.into());
        }
    };

    if !report.rebased.is_empty() {
        println!(
            "\n{} Rebased {} pull request{}, back on {}",
            style("✨").green(),
            report.rebased.len(),
            if report.rebased.len() == 1 { "" } else { "s" },
            style(&ctx.original_branch).cyan()
        );
    }

    Ok(())
}

/// What to do next when the rebase left the working copy on a failing branch
fn recovery_hint(err: &StackError, original_branch: &str) -> Option<String> {
    if !err.needs_manual_resolution() {
        return None;
    }
    Some(format!(
        "The working copy was left where the rebase stopped. \
         Once resolved, `git switch {}` and run `pr-stack rebase` again.",
        original_branch
    ))
}
