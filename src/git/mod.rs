//! Version-Control Port: the local working copy and its remote.

pub mod checkout;
pub mod refs;
pub mod repo;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::Context;
use git2::Repository;

use crate::error::Result;
use crate::process::{self, Input, ProcessOutput};

/// Result of fast-forwarding a branch from its upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// Local branch now matches (or already matched) its upstream
    Updated,
    /// Local and remote both have commits the other lacks
    Diverged,
}

/// Result of rebasing the checked-out branch onto a remote branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebaseOutcome {
    Rebased,
    /// The rebase stopped on content conflicts and is still in progress
    Conflicts,
}

/// Operations the workflows perform on the working copy
///
/// Every call blocks until the underlying command exits.
pub trait Vcs {
    /// Name of the checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Whether the working copy has no uncommitted changes
    fn is_clean(&self) -> Result<bool>;

    fn switch(&self, branch: &str) -> Result<()>;

    /// Fast-forward the checked-out branch from its upstream
    fn pull(&self) -> Result<PullOutcome>;

    /// Rebase the checked-out branch onto `remote/base`
    fn pull_rebase(&self, remote: &str, base: &str) -> Result<RebaseOutcome>;

    fn push_force(&self, remote: &str, branch: &str) -> Result<()>;

    /// Push a new branch and set it as upstream
    fn publish_branch(&self, remote: &str, branch: &str) -> Result<()>;

    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Check out a commit with a detached HEAD
    fn checkout_detached(&self, oid: &str) -> Result<()>;

    /// Create a branch at HEAD and switch to it
    fn create_branch(&self, name: &str) -> Result<()>;
}

/// [`Vcs`] backed by the `git` command-line tool, with git2 for read-only queries
pub struct GitCli {
    repo: Repository,
    workdir: PathBuf,
}

impl GitCli {
    /// Open the repository containing `path`
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let repo = Repository::discover(path.as_ref())
            .context("Failed to open git repository. Are you in a git repository?")?;
        let workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .to_path_buf();

        Ok(Self { repo, workdir })
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub(crate) fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        process::run("git", args, &self.workdir, &[], Input::Closed)
    }
}

impl Vcs for GitCli {
    fn current_branch(&self) -> Result<String> {
        repo::current_branch(&self.repo)
    }

    fn is_clean(&self) -> Result<bool> {
        repo::is_clean(&self.repo)
    }

    fn switch(&self, branch: &str) -> Result<()> {
        checkout::switch(self, branch)
    }

    fn pull(&self) -> Result<PullOutcome> {
        sync::pull(self)
    }

    fn pull_rebase(&self, remote: &str, base: &str) -> Result<RebaseOutcome> {
        sync::pull_rebase(self, remote, base)
    }

    fn push_force(&self, remote: &str, branch: &str) -> Result<()> {
        refs::push_force(self, remote, branch)
    }

    fn publish_branch(&self, remote: &str, branch: &str) -> Result<()> {
        refs::publish_branch(self, remote, branch)
    }

    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()> {
        refs::delete_remote_branch(self, remote, branch)
    }

    fn checkout_detached(&self, oid: &str) -> Result<()> {
        checkout::checkout_detached(self, oid)
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        checkout::create_branch(self, name)
    }
}
