use serde::Deserialize;
use tracing::warn;

use crate::checks;
use crate::error::{Result, StackError};
use crate::model::{Commit, PullRequest};

use super::GhCli;

/// Fields requested from `gh pr list --json`
pub const PULL_REQUEST_FIELDS: &[&str] = &[
    "number",
    "baseRefName",
    "headRefName",
    "id",
    "isDraft",
    "mergeable",
    "title",
    "url",
    "reviewDecision",
    "reviewRequests",
    "statusCheckRollup",
];

/// Upper bound on how many open PRs one listing returns
const LIST_LIMIT: usize = 500;

/// A requested reviewer; teams carry a name instead of a login
#[derive(Debug, Clone, Deserialize)]
pub struct RawReviewRequest {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `statusCheckRollup`: a check run (`conclusion`) or a commit status (`state`)
#[derive(Debug, Clone, Deserialize)]
pub struct RawStatusCheck {
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl RawStatusCheck {
    /// The conclusion string fed to the checks aggregator; empty while pending
    pub fn conclusion(&self) -> &str {
        let conclusion = self.conclusion.as_deref().unwrap_or("");
        if !conclusion.is_empty() {
            return conclusion;
        }
        self.state.as_deref().unwrap_or("")
    }
}

/// A pull request as printed by `gh pr list --json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPullRequest {
    pub number: u64,
    pub base_ref_name: String,
    pub head_ref_name: String,
    pub id: String,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub mergeable: Option<String>,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub review_decision: Option<String>,
    #[serde(default)]
    pub review_requests: Option<Vec<RawReviewRequest>>,
    #[serde(default)]
    pub status_check_rollup: Option<Vec<RawStatusCheck>>,
}

impl RawPullRequest {
    /// Map to the strict model, aggregating checks on the way
    pub fn into_pull_request(self, current_branch: &str) -> Result<PullRequest> {
        let checks = self.status_check_rollup.unwrap_or_default();
        let checks_status = checks::aggregate(checks.iter().map(RawStatusCheck::conclusion))?;

        let reviewers = self
            .review_requests
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| r.login.or(r.name))
            .collect();

        Ok(PullRequest {
            number: self.number,
            is_current: self.head_ref_name == current_branch,
            branch: self.head_ref_name,
            base_branch: self.base_ref_name,
            title: self.title,
            url: self.url,
            is_draft: self.is_draft,
            mergeable: self.mergeable.unwrap_or_default(),
            review_decision: self.review_decision.unwrap_or_default(),
            reviewers,
            checks_status,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCommit {
    oid: String,
    #[serde(default)]
    message_headline: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCommitList {
    commits: Vec<RawCommit>,
}

/// Parse `gh pr list --json` output
pub fn parse_pull_requests(json: &str, current_branch: &str) -> Result<Vec<PullRequest>> {
    let raw: Vec<RawPullRequest> =
        serde_json::from_str(json).map_err(|source| StackError::Json {
            command: "gh pr list".to_string(),
            source,
        })?;

    raw.into_iter()
        .map(|pr| pr.into_pull_request(current_branch))
        .collect()
}

/// Parse `gh pr view --json commits` output
pub fn parse_commits(json: &str) -> Result<Vec<Commit>> {
    let raw: RawCommitList = serde_json::from_str(json).map_err(|source| StackError::Json {
        command: "gh pr view".to_string(),
        source,
    })?;

    Ok(raw
        .commits
        .into_iter()
        .map(|c| Commit {
            oid: c.oid,
            title: c.message_headline,
        })
        .collect())
}

/// List the open pull requests of the repository
pub fn list_open_pull_requests(gh: &GhCli, current_branch: &str) -> Result<Vec<PullRequest>> {
    let fields = PULL_REQUEST_FIELDS.join(",");
    let limit = LIST_LIMIT.to_string();
    let stdout = gh
        .run(&[
            "pr", "list", "--state", "open", "--limit", &limit, "--json", &fields,
        ])?
        .into_stdout()?;

    let pull_requests = parse_pull_requests(&stdout, current_branch)?;
    if may_be_truncated(pull_requests.len()) {
        warn!(
            limit = LIST_LIMIT,
            "gh returned the maximum number of open pull requests, stacks may be incomplete"
        );
    }
    Ok(pull_requests)
}

/// Whether a listing of `count` PRs hit the limit and may have dropped some
fn may_be_truncated(count: usize) -> bool {
    count >= LIST_LIMIT
}

/// List the commits of a pull request, in host order
pub fn list_commits(gh: &GhCli, number: u64) -> Result<Vec<Commit>> {
    let number = number.to_string();
    let stdout = gh
        .run(&["pr", "view", &number, "--json", "commits"])?
        .into_stdout()?;

    parse_commits(&stdout)
}
