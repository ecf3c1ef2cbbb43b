use crate::error::Result;

use super::GitCli;

/// Switch the working copy to `branch`, creating a tracking branch if only the remote has it
pub fn switch(git: &GitCli, branch: &str) -> Result<()> {
    git.run(&["switch", branch])?.into_stdout()?;
    Ok(())
}

pub fn checkout_detached(git: &GitCli, oid: &str) -> Result<()> {
    git.run(&["checkout", "--detach", oid])?.into_stdout()?;
    Ok(())
}

pub fn create_branch(git: &GitCli, name: &str) -> Result<()> {
    git.run(&["switch", "-c", name])?.into_stdout()?;
    Ok(())
}
