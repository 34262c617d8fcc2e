//! Bulk data-parallel layer expansion on rayon.

use std::sync::Arc;

use fanout_kernel::{Node, Problem, SearchState};
use rayon::prelude::*;

use crate::status::SearchStatus;
use crate::strategy::SearchStrategy;

/// Bulk-parallel layer expansion: the children of each node are explored
/// through a single data-parallel "for every child, recurse" call that blocks
/// until each child subtree has either completed or observed cancellation.
///
/// This trades the fine-grained concurrency of
/// [`ForkJoinBfs`](crate::fork_join::ForkJoinBfs) for simpler lifetime
/// management: no detached task outlives the call that spawned it. The
/// short-circuiting `find_map_any` keeps the FirstToSignal claim contract —
/// the first subtree to claim a goal wins, everything still running stops at
/// its next poll.
///
/// Tree-like: valid only on problems without reachable cycles. Panics inside
/// the parallel iterator are propagated to the caller by rayon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerBfs;

impl LayerBfs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S: SearchState> SearchStrategy<S> for LayerBfs {
    fn name(&self) -> &'static str {
        "layered"
    }

    fn search(&self, problem: &Problem<S>) -> Option<Arc<Node<S>>> {
        let status = SearchStatus::new();
        layer_search(problem.root(), problem, &status)
    }
}

fn layer_search<S: SearchState>(
    node: Arc<Node<S>>,
    problem: &Problem<S>,
    status: &SearchStatus,
) -> Option<Arc<Node<S>>> {
    if problem.is_goal(node.state()) {
        return status.try_claim_solution().then_some(node);
    }
    if status.solution_found() {
        return None;
    }
    problem
        .expand(&node)
        .into_par_iter()
        .find_map_any(|child| layer_search(child, problem, status))
}
