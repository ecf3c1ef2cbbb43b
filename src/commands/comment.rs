use anyhow::Result;

use crate::error::StackError;

/// Post the stack overview as a PR comment
pub fn comment() -> Result<()> {
    Err(StackError::NotImplemented("comment".to_string()).into())
}
