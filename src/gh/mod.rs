//! Pull-Request Source: the PR host as seen through the GitHub CLI.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::GhCli;

use crate::error::Result;
use crate::model::{Commit, MergeStrategy, PullRequest};

/// Read and write access to the open pull requests of one repository
///
/// Every call blocks until the host answers.
pub trait PullRequestSource {
    /// Open pull requests, with `is_current` set on the one whose head is `current_branch`
    fn pull_requests(&self, current_branch: &str) -> Result<Vec<PullRequest>>;

    /// Commits of a pull request, in host order
    fn commits(&self, number: u64) -> Result<Vec<Commit>>;

    /// Open a PR from the checked-out branch into `base`; returns the new PR's URL
    fn create(&self, base: &str) -> Result<String>;

    /// Change the base branch of an existing PR
    fn edit_base(&self, number: u64, base: &str) -> Result<()>;

    /// Merge a PR on the host
    fn merge(&self, number: u64, strategy: MergeStrategy) -> Result<()>;
}
