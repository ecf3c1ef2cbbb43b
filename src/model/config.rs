use anyhow::{Context, Result, bail};
use git2::Repository;

/// How `pop` merges the bottom PR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    #[default]
    Merge,
    Squash,
    Rebase,
}

impl MergeStrategy {
    /// Flag understood by `gh pr merge`
    pub fn gh_flag(self) -> &'static str {
        match self {
            MergeStrategy::Merge => "--merge",
            MergeStrategy::Squash => "--squash",
            MergeStrategy::Rebase => "--rebase",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(MergeStrategy::Merge),
            "squash" => Ok(MergeStrategy::Squash),
            "rebase" => Ok(MergeStrategy::Rebase),
            other => bail!(
                "Invalid pr-stack.mergeStrategy `{}`: expected merge, squash or rebase",
                other
            ),
        }
    }
}

/// Configuration for pr-stack
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote name (e.g., "origin")
    pub remote: String,
    /// Repository default branch (e.g., "main")
    pub default_branch: String,
    /// Merge strategy used by `pop`
    pub merge_strategy: MergeStrategy,
    /// Delete the remote head branch after `pop`
    pub delete_branch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            default_branch: "main".to_string(),
            merge_strategy: MergeStrategy::Merge,
            delete_branch: true,
        }
    }
}

impl Config {
    /// Load configuration from git config and defaults
    pub fn load(repo: &Repository) -> Result<Self> {
        let git_config = repo.config().context("Failed to load git config")?;

        let remote = git_config
            .get_string("pr-stack.remote")
            .unwrap_or_else(|_| "origin".to_string());

        // Try git config first, then the remote's HEAD
        let default_branch = git_config
            .get_string("pr-stack.defaultBranch")
            .ok()
            .or_else(|| remote_head_branch(repo, &remote))
            .unwrap_or_else(|| "main".to_string());

        let merge_strategy = match git_config.get_string("pr-stack.mergeStrategy") {
            Ok(value) => MergeStrategy::parse(&value)?,
            Err(_) => MergeStrategy::default(),
        };

        let delete_branch = git_config
            .get_bool("pr-stack.deleteBranch")
            .unwrap_or(true);

        Ok(Self {
            remote,
            default_branch,
            merge_strategy,
            delete_branch,
        })
    }
}

/// Branch name `refs/remotes/<remote>/HEAD` points at, if the clone recorded it
fn remote_head_branch(repo: &Repository, remote: &str) -> Option<String> {
    let head_ref = format!("refs/remotes/{}/HEAD", remote);
    let prefix = format!("refs/remotes/{}/", remote);

    repo.find_reference(&head_ref).ok().and_then(|r| {
        r.symbolic_target()
            .and_then(|t| t.strip_prefix(prefix.as_str()))
            .map(String::from)
    })
}
