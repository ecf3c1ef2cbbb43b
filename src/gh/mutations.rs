use tracing::{info, warn};

use crate::error::{Result, StackError};
use crate::model::MergeStrategy;

use super::GhCli;

/// Marker of the GraphQL error `gh pr edit` raises on repositories that
/// still expose classic project cards
const PROJECTS_CLASSIC_DEPRECATION: &str = "Projects (classic) is being deprecated";

/// Create a pull request from the checked-out branch into `base`
///
/// Title and body are filled from the branch commits. Returns the URL `gh`
/// prints for the new PR.
pub fn create_pull_request(gh: &GhCli, base: &str) -> Result<String> {
    let output = gh.run_interactive(&[
        "pr",
        "create",
        "--fill",
        "--base",
        base,
        "--assignee",
        "@me",
    ])?;
    let stdout = output.into_stdout()?;

    let url = extract_url(&stdout).unwrap_or_else(|| stdout.trim().to_string());
    info!(%url, base, "created pull request");
    Ok(url)
}

/// Change the base branch of a pull request
pub fn update_pull_request_base(gh: &GhCli, number: u64, base: &str) -> Result<()> {
    let number_arg = number.to_string();
    let output = gh.run(&["pr", "edit", &number_arg, "--base", base])?;

    if output.success {
        info!(number, base, "updated pull request base");
        return Ok(());
    }

    Err(classify_edit_failure(number, base, output.combined()).unwrap_or_else(|| output.into_error()))
}

/// Merge a pull request with the given strategy
pub fn merge_pull_request(gh: &GhCli, number: u64, strategy: MergeStrategy) -> Result<()> {
    let number_arg = number.to_string();
    gh.run(&["pr", "merge", &number_arg, strategy.gh_flag()])?
        .into_stdout()?;

    info!(number, ?strategy, "merged pull request");
    Ok(())
}

/// Recognise known `gh pr edit` failures that deserve remediation text
fn classify_edit_failure(number: u64, base: &str, message: String) -> Option<StackError> {
    if message.contains(PROJECTS_CLASSIC_DEPRECATION) {
        warn!(number, "gh pr edit hit the Projects (classic) deprecation error");
        return Some(StackError::DeprecatedProjectsApi {
            command: format!("gh pr edit {} --base {}", number, base),
            number,
            base: base.to_string(),
        });
    }
    None
}

/// Last URL-looking line of `gh pr create` output
fn extract_url(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("https://") || line.starts_with("http://"))
        .last()
        .map(String::from)
}
