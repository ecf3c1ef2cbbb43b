use console::style;

use crate::model::{ChecksStatus, OperationContext, PullRequest};

/// Readiness of a PR as shown in the stack table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrStatus {
    ChecksFailed,
    ChecksRunning,
    ReviewRequired { reviewers: Vec<String> },
    Draft,
    ReadyToMerge,
}

/// Decide what a PR is waiting on; the first matching rule wins
pub fn pr_status(pr: &PullRequest) -> PrStatus {
    match pr.checks_status {
        ChecksStatus::Failure => return PrStatus::ChecksFailed,
        ChecksStatus::Running => return PrStatus::ChecksRunning,
        ChecksStatus::Success => {}
    }

    if pr.review_decision == "REVIEW_REQUIRED" {
        return PrStatus::ReviewRequired {
            reviewers: pr.reviewers.clone(),
        };
    }

    if pr.is_draft {
        return PrStatus::Draft;
    }

    PrStatus::ReadyToMerge
}

/// Styled one- or two-line status text
pub fn format_status(pr: &PullRequest) -> String {
    match pr_status(pr) {
        PrStatus::ChecksFailed => style("❌ Checks failed").red().to_string(),
        PrStatus::ChecksRunning => style("⏳ Checks running").blue().to_string(),
        PrStatus::ReviewRequired { reviewers } => {
            let mut text = style("👀 Review required").yellow().to_string();
            if !reviewers.is_empty() {
                text.push_str(&format!("\n{}", style(reviewers.join(", ")).yellow()));
            }
            text
        }
        PrStatus::Draft => style("📝 Draft").black().bright().to_string(),
        PrStatus::ReadyToMerge => style("✅ Ready to merge").green().to_string(),
    }
}

/// Print the stack top-down, marking the checked-out PR
pub fn render_stack(ctx: &OperationContext) {
    if ctx.stack.is_empty() {
        println!("{}", style("No pull requests in stack").dim());
        println!(
            "  {} No open PR on {} and none based on it",
            style("ℹ").blue(),
            style(&ctx.original_branch).cyan()
        );
        return;
    }

    let number_width = ctx
        .stack
        .top_down()
        .map(|pr| pr.number.to_string().len() + 1)
        .max()
        .unwrap_or(2);

    for pr in ctx.stack.top_down() {
        render_row(pr, number_width);
    }

    println!(
        "  {}  {}",
        " ".repeat(number_width + 2),
        style(format!("↳ {}", ctx.default_branch)).yellow().dim()
    );
    println!();
}

fn render_row(pr: &PullRequest, number_width: usize) {
    let marker = if pr.is_current { "➤" } else { " " };
    let number = format!("#{}", pr.number);
    let padding = " ".repeat(number_width + 4);

    println!(
        "{} {:>width$}  {}",
        style(marker).green().bold(),
        style(&number).dim(),
        style(&pr.title).bold(),
        width = number_width
    );
    println!(
        "{}{} → {}",
        padding,
        style(&pr.branch).magenta(),
        style(&pr.base_branch).magenta()
    );
    for line in format_status(pr).lines() {
        println!("{}{}", padding, line);
    }
    println!("{}{}", padding, style(&pr.url).cyan().underlined());
}
