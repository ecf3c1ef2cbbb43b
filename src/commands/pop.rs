use anyhow::Result;
use console::style;

use super::Session;
use crate::prompt::{AssumeYes, Prompter, TerminalPrompter};
use crate::workflows::{self, PopOptions};

pub fn pop(yes: bool) -> Result<()> {
    let session = Session::open()?;
    let ctx = session.context()?;

    let prompter: Box<dyn Prompter> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompter::new())
    };

    let options = PopOptions {
        strategy: session.config.merge_strategy,
        delete_branch: session.config.delete_branch,
    };

    let report = workflows::pop(&ctx, &session.git, &session.gh, prompter.as_ref(), options)?;

    println!(
        "\n{} Popped #{} into {}",
        style("🎉").green(),
        report.merged,
        style(&ctx.default_branch).cyan()
    );
    if !report.retargeted.is_empty() {
        println!(
            "  {} Run {} to bring the rest of the stack up to date",
            style("💡").yellow(),
            style("pr-stack rebase").bold()
        );
    }

    Ok(())
}
