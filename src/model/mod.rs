pub mod config;
pub mod context;
pub mod pull_request;
pub mod stack;

pub use config::{Config, MergeStrategy};
pub use context::OperationContext;
pub use pull_request::{ChecksStatus, Commit, PullRequest};
pub use stack::Stack;
