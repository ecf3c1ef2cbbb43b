//! Reduces the raw status checks of a PR to one verdict.

use crate::error::{Result, StackError};
use crate::model::ChecksStatus;

/// Conclusions that carry no information about the PR's health
const UNINFORMATIVE: [&str; 2] = ["SUCCESS", "NEUTRAL"];

/// Markers for checks that have not concluded yet
///
/// In-progress check runs report an empty conclusion; commit status
/// contexts report `PENDING` in their state.
const PENDING: [&str; 2] = ["", "PENDING"];

/// Aggregate per-check conclusions into SUCCESS, FAILURE or RUNNING.
///
/// Failure dominates everything else. Any value outside the known
/// vocabulary is rejected rather than defaulted.
pub fn aggregate<I, S>(conclusions: I) -> Result<ChecksStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let remaining: Vec<String> = conclusions
        .into_iter()
        .map(|c| c.as_ref().trim().to_string())
        .filter(|c| !UNINFORMATIVE.contains(&c.as_str()))
        .collect();

    if remaining.iter().any(|c| c == "FAILURE") {
        return Ok(ChecksStatus::Failure);
    }

    if remaining.is_empty() {
        return Ok(ChecksStatus::Success);
    }

    let mut unknown: Vec<String> = remaining
        .iter()
        .filter(|c| !PENDING.contains(&c.as_str()))
        .cloned()
        .collect();

    if !unknown.is_empty() {
        unknown.sort();
        unknown.dedup();
        return Err(StackError::UnknownCheckStatus(unknown));
    }

    Ok(ChecksStatus::Running)
}
