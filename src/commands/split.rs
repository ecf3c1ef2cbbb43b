use anyhow::Result;

use super::{Session, open_in_browser};
use crate::prompt::TerminalPrompter;
use crate::workflows::{self, SplitOptions};

pub fn split(commit: Option<String>, branch: Option<String>, web: bool) -> Result<()> {
    let session = Session::open()?;
    let ctx = session.context()?;

    let report = workflows::split(
        &ctx,
        &session.git,
        &session.gh,
        &TerminalPrompter::new(),
        SplitOptions { commit, branch },
    )?;

    if web {
        open_in_browser(&report.url);
    }

    Ok(())
}
