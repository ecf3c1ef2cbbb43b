use tracing::{debug, warn};

use crate::error::Result;

use super::{GitCli, PullOutcome, RebaseOutcome};

/// Messages git prints when a fast-forward is impossible
const DIVERGENCE_MARKERS: &[&str] = &[
    "Not possible to fast-forward",
    "divergent branches",
    "have diverged",
];

/// Messages git prints when a rebase stops on conflicts
const CONFLICT_MARKERS: &[&str] = &[
    "CONFLICT",
    "could not apply",
    "Resolve all conflicts manually",
];

/// Fast-forward the checked-out branch from its upstream
pub fn pull(git: &GitCli) -> Result<PullOutcome> {
    let output = git.run(&["pull", "--no-rebase", "--ff-only"])?;

    if output.success {
        return Ok(PullOutcome::Updated);
    }

    if is_divergence(&output.combined()) {
        warn!("pull refused: local and remote branches diverged");
        return Ok(PullOutcome::Diverged);
    }

    Err(output.into_error())
}

/// Rebase the checked-out branch onto `remote/base`, leaving conflicts in place
pub fn pull_rebase(git: &GitCli, remote: &str, base: &str) -> Result<RebaseOutcome> {
    let output = git.run(&["pull", "--rebase", remote, base])?;

    if output.success {
        debug!(remote, base, "rebased");
        return Ok(RebaseOutcome::Rebased);
    }

    if is_conflict(&output.combined()) {
        warn!(remote, base, "rebase stopped on conflicts");
        return Ok(RebaseOutcome::Conflicts);
    }

    Err(output.into_error())
}

fn is_divergence(message: &str) -> bool {
    DIVERGENCE_MARKERS.iter().any(|m| message.contains(m))
}

fn is_conflict(message: &str) -> bool {
    CONFLICT_MARKERS.iter().any(|m| message.contains(m))
}
