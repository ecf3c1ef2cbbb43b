//! Error taxonomy shared by the stack builder, the ports and the workflows.

/// Errors raised while building or operating on a PR stack
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    // Validation: preconditions not met, nothing was changed.
    #[error("The stack is empty, there is nothing to pop")]
    EmptyStack,

    #[error(
        "PR for branch `{branch}` targets `{base}`, not the default branch `{default_branch}`. \
         Merge or pop the PRs below it first."
    )]
    BaseBranchMismatch {
        branch: String,
        base: String,
        default_branch: String,
    },

    #[error("Branch `{0}` has no open pull request")]
    NoPullRequestOnBranch(String),

    #[error("No open pull request to stack onto")]
    NoCandidateBase,

    #[error("PR #{0} is not a valid base for the current branch")]
    InvalidCandidateBase(u64),

    #[error("Branch `{0}` is already part of a stack")]
    AlreadyStacked(String),

    #[error("Pull request #{number} has {count} commit(s), need at least two to split")]
    NothingToSplit { number: u64, count: usize },

    #[error("Commit `{0}` does not belong to the current pull request")]
    UnknownCommit(String),

    #[error("Commit prefix `{0}` matches more than one commit, use a longer one")]
    AmbiguousCommit(String),

    #[error("Splitting at the last commit `{0}` would leave the original pull request empty")]
    SplitAtHead(String),

    #[error("You have uncommitted changes. Please commit or stash them first.")]
    DirtyWorkingCopy,

    #[error("Operation cancelled")]
    Declined,

    // Divergence and conflicts: the repository is left as-is for manual resolution.
    #[error(
        "Branches are not in sync. Please ensure that `{0}` is in sync with its remote \
         (pull or reset it), then run the command again."
    )]
    DivergentBranches(String),

    #[error(
        "Rebasing `{0}` stopped on merge conflicts. Resolve them, run `git rebase --continue` \
         and `git push --force`, then run the command again."
    )]
    MergeConflicts(String),

    // Contract violations: the host returned data we cannot interpret.
    #[error("Unknown check status value(s): {}", .0.join(", "))]
    UnknownCheckStatus(Vec<String>),

    #[error("Pull request bases form a cycle through branch `{0}`")]
    CyclicStack(String),

    // Host tool quirks.
    #[error(
        "`{command}` failed on the GitHub Projects (classic) deprecation error. \
         Upgrade the GitHub CLI (`gh --version` should be 2.80 or newer), or change the base with: \
         gh api -X PATCH repos/{{owner}}/{{repo}}/pulls/{number} -f base={base}"
    )]
    DeprecatedProjectsApi {
        command: String,
        number: u64,
        base: String,
    },

    #[error("`{0}` is not implemented yet")]
    NotImplemented(String),

    // Unclassifiable external-process failures, reported verbatim.
    #[error("`{program} {}` failed: {stderr}", .args.join(" "))]
    CommandFailed {
        program: String,
        args: Vec<String>,
        stderr: String,
    },

    #[error("Failed to run `{program}`: {source}. Is it installed and on PATH?")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to parse `{command}` output: {source}")]
    Json {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl StackError {
    /// Whether the error left the repository in a state the operator must resolve by hand
    pub fn needs_manual_resolution(&self) -> bool {
        matches!(
            self,
            StackError::DivergentBranches(_) | StackError::MergeConflicts(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StackError>;
