use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use pr_stack::error::{Result, StackError};
use pr_stack::gh::PullRequestSource;
use pr_stack::git::{PullOutcome, RebaseOutcome, Vcs};
use pr_stack::model::{Commit, MergeStrategy, PullRequest};
use pr_stack::prompt::Prompter;

/// Working copy that records every call as a readable line
pub struct MockVcs {
    pub calls: RefCell<Vec<String>>,
    current: RefCell<String>,
    clean: Cell<bool>,
    diverged: HashSet<String>,
    conflicted: HashSet<String>,
}

impl MockVcs {
    pub fn on(branch: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            current: RefCell::new(branch.to_string()),
            clean: Cell::new(true),
            diverged: HashSet::new(),
            conflicted: HashSet::new(),
        }
    }

    pub fn dirty(self) -> Self {
        self.clean.set(false);
        self
    }

    /// `pull` on `branch` reports divergence
    pub fn diverged_on(mut self, branch: &str) -> Self {
        self.diverged.insert(branch.to_string());
        self
    }

    /// `pull_rebase` on `branch` stops on conflicts
    pub fn conflicted_on(mut self, branch: &str) -> Self {
        self.conflicted.insert(branch.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Vcs for MockVcs {
    fn current_branch(&self) -> Result<String> {
        Ok(self.current())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.clean.get())
    }

    fn switch(&self, branch: &str) -> Result<()> {
        self.record(format!("switch {}", branch));
        *self.current.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn pull(&self) -> Result<PullOutcome> {
        let branch = self.current();
        self.record(format!("pull {}", branch));
        if self.diverged.contains(&branch) {
            Ok(PullOutcome::Diverged)
        } else {
            Ok(PullOutcome::Updated)
        }
    }

    fn pull_rebase(&self, remote: &str, base: &str) -> Result<RebaseOutcome> {
        let branch = self.current();
        self.record(format!("pull_rebase {} onto {}/{}", branch, remote, base));
        if self.conflicted.contains(&branch) {
            Ok(RebaseOutcome::Conflicts)
        } else {
            Ok(RebaseOutcome::Rebased)
        }
    }

    fn push_force(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push_force {}/{}", remote, branch));
        Ok(())
    }

    fn publish_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("publish {}/{}", remote, branch));
        Ok(())
    }

    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("delete {}/{}", remote, branch));
        Ok(())
    }

    fn checkout_detached(&self, oid: &str) -> Result<()> {
        self.record(format!("checkout_detached {}", oid));
        *self.current.borrow_mut() = "HEAD".to_string();
        Ok(())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.record(format!("create_branch {}", name));
        *self.current.borrow_mut() = name.to_string();
        Ok(())
    }
}

/// PR host that records mutations and can be told to fail them
#[derive(Default)]
pub struct MockSource {
    pub calls: RefCell<Vec<String>>,
    pub pull_requests: Vec<PullRequest>,
    pub commits: Vec<Commit>,
    pub created_url: String,
    /// `edit_base` fails for this PR number
    pub fail_edit_base: Option<u64>,
    /// `merge` fails with this message
    pub fail_merge: Option<String>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            created_url: "https://github.com/acme/widgets/pull/100".to_string(),
            ..Default::default()
        }
    }

    pub fn with_commits(mut self, oids: &[&str]) -> Self {
        self.commits = oids
            .iter()
            .enumerate()
            .map(|(i, oid)| Commit {
                oid: oid.to_string(),
                title: format!("commit {}", i + 1),
            })
            .collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl PullRequestSource for MockSource {
    fn pull_requests(&self, current_branch: &str) -> Result<Vec<PullRequest>> {
        Ok(self
            .pull_requests
            .iter()
            .cloned()
            .map(|mut pr| {
                pr.is_current = pr.branch == current_branch;
                pr
            })
            .collect())
    }

    fn commits(&self, number: u64) -> Result<Vec<Commit>> {
        self.record(format!("commits #{}", number));
        Ok(self.commits.clone())
    }

    fn create(&self, base: &str) -> Result<String> {
        self.record(format!("create onto {}", base));
        Ok(self.created_url.clone())
    }

    fn edit_base(&self, number: u64, base: &str) -> Result<()> {
        self.record(format!("edit_base #{} {}", number, base));
        if self.fail_edit_base == Some(number) {
            return Err(StackError::DeprecatedProjectsApi {
                command: format!("gh pr edit {} --base {}", number, base),
                number,
                base: base.to_string(),
            });
        }
        Ok(())
    }

    fn merge(&self, number: u64, strategy: MergeStrategy) -> Result<()> {
        self.record(format!("merge #{} {}", number, strategy.gh_flag()));
        if let Some(stderr) = &self.fail_merge {
            return Err(StackError::CommandFailed {
                program: "gh".into(),
                args: vec!["pr".into(), "merge".into(), number.to_string()],
                stderr: stderr.clone(),
            });
        }
        Ok(())
    }
}

/// Prompter with canned answers that remembers what it was asked
pub struct ScriptedPrompter {
    pub asked: RefCell<Vec<String>>,
    confirm: bool,
    select: usize,
    input: Option<String>,
}

impl ScriptedPrompter {
    pub fn answering(confirm: bool) -> Self {
        Self {
            asked: RefCell::new(Vec::new()),
            confirm,
            select: 0,
            input: None,
        }
    }

    pub fn selecting(mut self, index: usize) -> Self {
        self.select = index;
        self
    }

    pub fn typing(mut self, text: &str) -> Self {
        self.input = Some(text.to_string());
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.confirm)
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        self.asked
            .borrow_mut()
            .push(format!("{} [{}]", message, items.join(" | ")));
        Ok(self.select)
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        self.asked
            .borrow_mut()
            .push(format!("{} ({})", message, default));
        Ok(self.input.clone().unwrap_or_else(|| default.to_string()))
    }
}
