//! Human-in-the-loop decisions: confirmations, selections and text input.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::error::Result;

/// Questions a workflow may ask the operator
pub trait Prompter {
    /// Yes/no question; `false` means the operator declined
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Pick one of `items`; returns its index
    fn select(&self, message: &str, items: &[String]) -> Result<usize>;

    /// Free text with a default answer
    fn input(&self, message: &str, default: &str) -> Result<String>;
}

/// [`Prompter`] that asks on the terminal (stderr)
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()?)
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()?)
    }
}

/// [`Prompter`] that answers yes to every confirmation
///
/// Used for `--yes`. Selections and text input still go to the terminal.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(true)
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        TerminalPrompter::new().select(message, items)
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        TerminalPrompter::new().input(message, default)
    }
}
