//! Stack discovery: turns the flat list of open PRs into the ordered stack
//! reachable from a branch.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{Result, StackError};
use crate::model::{PullRequest, Stack};

/// Directed graph of branches, with one edge from each PR's head branch to its base
///
/// Nodes without a PR (the default branch, or a base whose PR is closed)
/// only appear as edge targets. Every node has at most one outgoing edge.
#[derive(Debug, Clone, Default)]
pub struct StackGraph {
    base_of: HashMap<String, String>,
    /// Reverse edges, in the order the PRs were listed
    dependents: HashMap<String, Vec<String>>,
}

impl StackGraph {
    pub fn from_pull_requests(pull_requests: &[PullRequest]) -> Self {
        let mut graph = Self::default();

        for pr in pull_requests {
            if graph.base_of.contains_key(&pr.branch) {
                warn!(branch = %pr.branch, number = pr.number, "duplicate head branch, keeping first PR");
                continue;
            }
            graph
                .base_of
                .insert(pr.branch.clone(), pr.base_branch.clone());
            graph
                .dependents
                .entry(pr.base_branch.clone())
                .or_default()
                .push(pr.branch.clone());
        }

        graph
    }

    /// Base branch of `branch`, if `branch` is the head of a PR
    pub fn base_of(&self, branch: &str) -> Option<&str> {
        self.base_of.get(branch).map(String::as_str)
    }

    /// Branches that directly base on `branch`
    pub fn dependents_of(&self, branch: &str) -> &[String] {
        self.dependents
            .get(branch)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Chain from `branch` down to the first node with no base, `branch` included
    pub fn predecessor_path<'a>(&'a self, branch: &'a str) -> Result<Vec<&'a str>> {
        let mut path = vec![branch];
        let mut visited: HashSet<&str> = HashSet::from([branch]);
        let mut node = branch;

        while let Some(base) = self.base_of(node) {
            if !visited.insert(base) {
                return Err(StackError::CyclicStack(base.to_string()));
            }
            path.push(base);
            node = base;
        }

        Ok(path)
    }

    /// Every branch that transitively bases on `branch`, depth-first preorder,
    /// `branch` excluded
    pub fn successor_subtree<'a>(&'a self, branch: &'a str) -> Result<Vec<&'a str>> {
        let mut order = Vec::new();
        let mut visited: HashSet<&str> = HashSet::from([branch]);
        let mut pending: Vec<&str> = self
            .dependents_of(branch)
            .iter()
            .rev()
            .map(String::as_str)
            .collect();

        while let Some(node) = pending.pop() {
            if !visited.insert(node) {
                return Err(StackError::CyclicStack(node.to_string()));
            }
            order.push(node);
            pending.extend(self.dependents_of(node).iter().rev().map(String::as_str));
        }

        Ok(order)
    }
}

/// Build the stack of PRs reachable from `current_branch`.
///
/// The result holds the base chain of `current_branch` (bottom first,
/// ending with `current_branch`) followed by everything built on top of it.
/// Branches without a PR are skipped. For `A -> B -> C -> main` the stack
/// reads `[A, B, C]` top-down from any of the three branches.
pub fn build_stack(current_branch: &str, pull_requests: &[PullRequest]) -> Result<Stack> {
    let graph = StackGraph::from_pull_requests(pull_requests);

    let mut by_branch: HashMap<&str, &PullRequest> = HashMap::new();
    for pr in pull_requests {
        by_branch.entry(pr.branch.as_str()).or_insert(pr);
    }

    let predecessors = graph.predecessor_path(current_branch)?;
    let successors = graph.successor_subtree(current_branch)?;

    debug!(
        current = current_branch,
        ?predecessors,
        ?successors,
        "traversed stack graph"
    );

    let entries = predecessors
        .into_iter()
        .rev()
        .chain(successors)
        .filter_map(|branch| by_branch.get(branch).map(|pr| (*pr).clone()))
        .collect();

    let stack = Stack::new(entries);
    debug!(branches = ?stack.branches(), "built stack, bottom first");
    Ok(stack)
}
