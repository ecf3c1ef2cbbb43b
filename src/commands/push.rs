use anyhow::Result;

use super::{Session, open_in_browser};
use crate::prompt::TerminalPrompter;
use crate::workflows;

pub fn push(number: Option<u64>, web: bool) -> Result<()> {
    let session = Session::open()?;
    let ctx = session.context()?;

    let report = workflows::push(
        &ctx,
        &session.git,
        &session.gh,
        &TerminalPrompter::new(),
        number,
    )?;

    if web {
        open_in_browser(&report.url);
    }

    Ok(())
}
