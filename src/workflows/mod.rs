//! The stack operations. Each one is a single pass over the resolved
//! [`OperationContext`](crate::model::OperationContext): validate, then call
//! the ports in order, stopping at the first failure.

pub mod pop;
pub mod push;
pub mod rebase;
pub mod split;

pub use pop::{PopOptions, PopReport, pop};
pub use push::{PushReport, push};
pub use rebase::{RebaseReport, rebase_stack};
pub use split::{SplitOptions, SplitReport, split};
