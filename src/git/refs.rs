use tracing::{info, warn};

use crate::error::Result;

use super::GitCli;

/// Push `branch` to `remote`, overwriting whatever the remote has
pub fn push_force(git: &GitCli, remote: &str, branch: &str) -> Result<()> {
    git.run(&["push", "--force", "--porcelain", remote, branch])?
        .into_stdout()?;
    info!(remote, branch, "force-pushed");
    Ok(())
}

/// Push a new branch and track it
pub fn publish_branch(git: &GitCli, remote: &str, branch: &str) -> Result<()> {
    git.run(&["push", "--porcelain", "--set-upstream", remote, branch])?
        .into_stdout()?;
    info!(remote, branch, "published branch");
    Ok(())
}

/// Message of a push deleting a branch the remote no longer has
const MISSING_REMOTE_REF: &str = "remote ref does not exist";

/// Delete `branch` on `remote`
///
/// A branch the host already removed (auto-delete on merge) counts as deleted.
pub fn delete_remote_branch(git: &GitCli, remote: &str, branch: &str) -> Result<()> {
    let output = git.run(&["push", "--porcelain", remote, "--delete", branch])?;

    if !output.success {
        if output.combined().contains(MISSING_REMOTE_REF) {
            warn!(remote, branch, "remote branch already deleted");
            return Ok(());
        }
        return Err(output.into_error());
    }

    info!(remote, branch, "deleted remote branch");
    Ok(())
}
