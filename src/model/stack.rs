use super::PullRequest;

/// An ordered chain of dependent pull requests
///
/// Entries are stored bottom to top: every PR whose base is also in the
/// stack comes after that base, so iterating in order visits bases before
/// their dependents. Display order is the reverse ([`Stack::top_down`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    /// All entries in order (bottom to top)
    pub entries: Vec<PullRequest>,
}

impl Stack {
    pub fn new(entries: Vec<PullRequest>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The bottom-most PR, the only one that can be merged into the default branch
    pub fn bottom(&self) -> Option<&PullRequest> {
        self.entries.first()
    }

    /// Entries bottom to top (dependency order)
    pub fn bottom_up(&self) -> impl DoubleEndedIterator<Item = &PullRequest> {
        self.entries.iter()
    }

    /// Entries top to bottom (display order)
    pub fn top_down(&self) -> impl DoubleEndedIterator<Item = &PullRequest> {
        self.entries.iter().rev()
    }

    pub fn branches(&self) -> Vec<&str> {
        self.entries.iter().map(|pr| pr.branch.as_str()).collect()
    }
}
