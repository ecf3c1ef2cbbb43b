use tracing::debug;

use crate::error::Result;
use crate::gh::PullRequestSource;
use crate::git::Vcs;
use crate::stack::build_stack;

use super::{Config, PullRequest, Stack};

/// Everything one command needs to know about the repository, resolved once at start
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Branch checked out when the command started
    pub original_branch: String,
    /// Repository default branch
    pub default_branch: String,
    /// Remote the PR branches live on
    pub remote: String,
    /// PR whose head is `original_branch`, if any
    pub current_pull_request: Option<PullRequest>,
    /// Every open PR of the repository
    pub pull_requests: Vec<PullRequest>,
    /// Stack reachable from `original_branch`
    pub stack: Stack,
}

impl OperationContext {
    /// Query the working copy and the PR host, then build the stack
    pub fn resolve(config: &Config, vcs: &dyn Vcs, source: &dyn PullRequestSource) -> Result<Self> {
        let original_branch = vcs.current_branch()?;
        let pull_requests = source.pull_requests(&original_branch)?;
        debug!(
            branch = %original_branch,
            count = pull_requests.len(),
            "loaded open pull requests"
        );
        Self::from_snapshot(config, original_branch, pull_requests)
    }

    /// Build a context from an already fetched PR list
    pub fn from_snapshot(
        config: &Config,
        original_branch: String,
        pull_requests: Vec<PullRequest>,
    ) -> Result<Self> {
        let stack = build_stack(&original_branch, &pull_requests)?;
        let current_pull_request = pull_requests
            .iter()
            .find(|pr| pr.branch == original_branch)
            .cloned();

        Ok(Self {
            original_branch,
            default_branch: config.default_branch.clone(),
            remote: config.remote.clone(),
            current_pull_request,
            pull_requests,
            stack,
        })
    }
}
