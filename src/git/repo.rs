use git2::{Repository, Status, StatusOptions};

use crate::error::{Result, StackError};

/// Get the current branch name
///
/// A detached HEAD has no branch; it is reported as `HEAD`, which never
/// heads a pull request.
pub fn current_branch(repo: &Repository) -> Result<String> {
    let head = match repo.head() {
        Ok(head) => head,
        // Unborn branch: HEAD points at a branch with no commits yet
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let head = repo.find_reference("HEAD")?;
            let target = head.symbolic_target().unwrap_or("HEAD");
            return Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string());
        }
        Err(e) => return Err(StackError::Git(e)),
    };

    if head.is_branch() {
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    } else {
        Ok("HEAD".to_string())
    }
}

/// Whether the working copy has no staged, unstaged or conflicted changes
/// (ignored files do not count)
pub fn is_clean(repo: &Repository) -> Result<bool> {
    let mut options = StatusOptions::new();
    options.include_untracked(true).include_ignored(false);

    let dirty = repo.statuses(Some(&mut options))?.iter().any(|s| {
        s.status().intersects(
            Status::INDEX_NEW
                | Status::INDEX_MODIFIED
                | Status::INDEX_DELETED
                | Status::INDEX_RENAMED
                | Status::INDEX_TYPECHANGE
                | Status::WT_NEW
                | Status::WT_MODIFIED
                | Status::WT_DELETED
                | Status::WT_RENAMED
                | Status::WT_TYPECHANGE
                | Status::CONFLICTED,
        )
    });

    Ok(!dirty)
}
