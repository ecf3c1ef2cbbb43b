use serde::{Deserialize, Serialize};

/// Aggregated state of the status checks of a PR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChecksStatus {
    Success,
    Failure,
    Running,
}

/// Snapshot of one open pull request, taken once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number, unique per repository
    pub number: u64,
    /// Head branch name
    pub branch: String,
    /// Branch this PR targets
    pub base_branch: String,
    pub title: String,
    pub url: String,
    /// Whether `branch` was checked out when the snapshot was taken
    pub is_current: bool,
    pub is_draft: bool,
    /// Host-reported mergeability (e.g. "MERGEABLE", "CONFLICTING", "UNKNOWN")
    pub mergeable: String,
    /// Host-reported review decision (e.g. "REVIEW_REQUIRED", "APPROVED")
    pub review_decision: String,
    /// Logins of requested reviewers, in host order
    pub reviewers: Vec<String>,
    pub checks_status: ChecksStatus,
}

/// A commit of a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub oid: String,
    /// First line of the commit message
    pub title: String,
}

impl Commit {
    pub fn short_oid(&self) -> &str {
        self.oid.get(..7).unwrap_or(&self.oid)
    }
}
