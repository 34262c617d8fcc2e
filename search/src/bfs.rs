//! The sequential frontier engine every strategy specializes or wraps.

use std::collections::HashSet;
use std::sync::Arc;

use fanout_kernel::{Node, Problem, SearchState};

use crate::frontier::Frontier;
use crate::status::SearchStatus;

/// Breadth-first search over `frontier` until a goal is claimed, the frontier
/// empties, or `status.solution_found()` is observed.
///
/// Tree-like: every node is pushed exactly once and expanded exactly once,
/// with no duplicate-state detection. If the head node's state is already a
/// goal it is returned without being expanded. A goal discovery that loses
/// the claim race returns `None` (see [`SearchStatus`]).
///
/// Transition-model panics are not caught here; they propagate to the caller
/// on the thread where they occurred.
pub fn search<S: SearchState>(
    frontier: &mut Frontier<S>,
    problem: &Problem<S>,
    status: &SearchStatus,
) -> Option<Arc<Node<S>>> {
    search_with_limit(frontier, problem, status, usize::MAX)
}

/// [`search`], additionally bounded by a frontier size limit.
///
/// The limit is checked against the frontier size before each pop, exactly
/// like the unbounded loop checks emptiness: the engine stops (returning
/// `None`) once the frontier has grown to at least `limit` entries. This is
/// the director's fan-out and `generate_work` primitive.
pub fn search_with_limit<S: SearchState>(
    frontier: &mut Frontier<S>,
    problem: &Problem<S>,
    status: &SearchStatus,
    limit: usize,
) -> Option<Arc<Node<S>>> {
    while !frontier.is_empty() && !status.solution_found() && frontier.len() < limit {
        let node = frontier.pop()?;
        if problem.is_goal(node.state()) {
            return status.try_claim_solution().then_some(node);
        }
        for child in problem.expand(&node) {
            frontier.push(child);
        }
    }
    None
}

/// Breadth-first search with a `reached` set that skips re-pushing states
/// already seen.
///
/// Correct **only** when frontier and reached set are owned by a single
/// thread: set insertion is unsynchronized. The concurrent strategies all use
/// the tree-like engine above instead and accept redundant exploration.
pub fn search_with_reached<S: SearchState>(
    root: Arc<Node<S>>,
    problem: &Problem<S>,
) -> Option<Arc<Node<S>>> {
    let mut reached: HashSet<S> = HashSet::from([root.state().clone()]);
    let mut frontier = Frontier::from_root(root);
    while let Some(node) = frontier.pop() {
        if problem.is_goal(node.state()) {
            return Some(node);
        }
        for child in problem.expand(&node) {
            if reached.insert(child.state().clone()) {
                frontier.push(child);
            }
        }
    }
    None
}
