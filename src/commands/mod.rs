pub mod comment;
pub mod pop;
pub mod push;
pub mod rebase;
pub mod split;
pub mod view;

pub use comment::comment;
pub use pop::pop;
pub use push::push;
pub use rebase::rebase;
pub use split::split;
pub use view::view;

use anyhow::Result;

use crate::gh::GhCli;
use crate::git::GitCli;
use crate::model::{Config, OperationContext};

/// Ports and configuration for the repository in the current directory
pub struct Session {
    pub config: Config,
    pub git: GitCli,
    pub gh: GhCli,
}

impl Session {
    pub fn open() -> Result<Self> {
        let git = GitCli::open(".")?;
        let config = Config::load(git.repository())?;
        let gh = GhCli::new(git.workdir());

        Ok(Self { config, git, gh })
    }

    /// Resolve the branch, the open PRs and the stack
    pub fn context(&self) -> Result<OperationContext> {
        Ok(OperationContext::resolve(&self.config, &self.git, &self.gh)?)
    }
}

/// Open a URL in the browser, warning instead of failing
pub(crate) fn open_in_browser(url: &str) {
    if let Err(e) = open::that(url) {
        eprintln!("Warning: Failed to open {}: {}", url, e);
    }
}
