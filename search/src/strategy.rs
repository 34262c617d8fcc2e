//! The contract every search strategy implements.

use std::sync::Arc;

use fanout_kernel::{Node, Problem, SearchState};

/// One search-execution strategy, benchmarkable interchangeably with every
/// other.
///
/// # Contract
///
/// - `search` never mutates the problem and assumes nothing about the state
///   representation beyond the [`SearchState`] bound.
/// - A returned node satisfies `problem.is_goal(node.state())` and its
///   parent chain terminates at the problem's initial state.
/// - `None` means the reachable space was exhausted with no goal found — a
///   normal outcome, not a failure.
/// - Concurrent implementations follow the FirstToSignal claim contract of
///   [`SearchStatus`](crate::status::SearchStatus): which goal is returned
///   when several branches contain goals is a race, but the winner is always
///   individually valid.
pub trait SearchStrategy<S: SearchState>: Send + Sync {
    /// Short stable identifier used by harnesses and benchmark reports.
    fn name(&self) -> &'static str;

    /// Run this strategy to completion on `problem`.
    fn search(&self, problem: &Problem<S>) -> Option<Arc<Node<S>>>;
}
