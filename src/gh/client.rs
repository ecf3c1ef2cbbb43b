use std::path::PathBuf;

use crate::error::Result;
use crate::model::{Commit, MergeStrategy, PullRequest};
use crate::process::{self, Input, ProcessOutput};

use super::{PullRequestSource, mutations, queries};

/// [`PullRequestSource`] backed by the `gh` command-line tool
#[derive(Debug, Clone)]
pub struct GhCli {
    workdir: PathBuf,
}

impl GhCli {
    /// Talk to the repository whose working copy is at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run `gh` non-interactively with colors disabled
    pub(crate) fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        process::run("gh", args, &self.workdir, &[("NO_COLOR", "1")], Input::Closed)
    }

    /// Run `gh` with the terminal attached to its stdin, for commands that may ask questions
    pub(crate) fn run_interactive(&self, args: &[&str]) -> Result<ProcessOutput> {
        process::run("gh", args, &self.workdir, &[], Input::Terminal)
    }
}

impl PullRequestSource for GhCli {
    fn pull_requests(&self, current_branch: &str) -> Result<Vec<PullRequest>> {
        queries::list_open_pull_requests(self, current_branch)
    }

    fn commits(&self, number: u64) -> Result<Vec<Commit>> {
        queries::list_commits(self, number)
    }

    fn create(&self, base: &str) -> Result<String> {
        mutations::create_pull_request(self, base)
    }

    fn edit_base(&self, number: u64, base: &str) -> Result<()> {
        mutations::update_pull_request_base(self, number, base)
    }

    fn merge(&self, number: u64, strategy: MergeStrategy) -> Result<()> {
        mutations::merge_pull_request(self, number, strategy)
    }
}
