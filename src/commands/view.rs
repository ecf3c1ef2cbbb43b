use anyhow::Result;

use super::Session;
use crate::ui::render_stack;

pub fn view() -> Result<()> {
    let session = Session::open()?;
    let ctx = session.context()?;

    render_stack(&ctx);

    Ok(())
}
