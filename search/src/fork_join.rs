//! Fork-join strategies: race one task per branch, cancel the siblings.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

use fanout_kernel::{Node, Problem, SearchState};
use log::debug;

use crate::bfs;
use crate::frontier::Frontier;
use crate::status::SearchStatus;
use crate::strategy::SearchStrategy;

fn available_parallelism() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Recursive task-per-branch search.
///
/// Each expanded child gets its own scoped thread applying the same function;
/// the parent joins them all and returns the claimed solution, if any. A task
/// that discovers a goal claims `solution_found` before returning, so running
/// siblings observe the flag at their next poll and stop spawning. In-flight
/// task bodies may still finish their current expansion step — the overshoot
/// is bounded by the number of in-flight tasks, not by the remaining tree.
///
/// Tree-like: valid only on problems without reachable cycles. A task panic
/// (e.g. from the transition model) is re-raised on the joining thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForkJoinBfs;

impl ForkJoinBfs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S: SearchState> SearchStrategy<S> for ForkJoinBfs {
    fn name(&self) -> &'static str {
        "fork-join"
    }

    fn search(&self, problem: &Problem<S>) -> Option<Arc<Node<S>>> {
        let status = SearchStatus::new();
        branch_search(problem.root(), problem, &status)
    }
}

fn branch_search<S: SearchState>(
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

    let children = problem.expand(&node);
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(children.len());
        for child in children {
            // Poll before spawning further work: a winning sibling stops
            // this branch from producing new tasks.
            if status.solution_found() {
                break;
            }
            handles.push(scope.spawn(move || branch_search(child, problem, status)));
        }

        let mut solution = None;
        for handle in handles {
            match handle.join() {
                Ok(result) => solution = solution.or(result),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        solution
    })
}

/// Seeded fan-out search: expand breadth-first until the frontier holds at
/// least `seed_target` nodes, then race one thread per seed, each running the
/// sequential engine over its own private frontier.
///
/// Coarser than [`ForkJoinBfs`] — thread count is bounded by the seed count
/// instead of growing with the branching factor at every level.
#[derive(Debug, Clone, Copy)]
pub struct FanOutBfs {
    seed_target: usize,
}

impl FanOutBfs {
    /// Fan out to at least the host's available parallelism.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed_target: available_parallelism(),
        }
    }

    /// Fan out to at least `seed_target` seed nodes.
    #[must_use]
    pub fn with_seed_target(seed_target: usize) -> Self {
        Self { seed_target }
    }
}

impl Default for FanOutBfs {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> SearchStrategy<S> for FanOutBfs {
    fn name(&self) -> &'static str {
        "fan-out"
    }

    fn search(&self, problem: &Problem<S>) -> Option<Arc<Node<S>>> {
        let status = SearchStatus::new();
        let mut frontier = Frontier::from_root(problem.root());

        // Fill the frontier with enough starting points first.
        if let Some(goal) = bfs::search_with_limit(&mut frontier, problem, &status, self.seed_target)
        {
            return Some(goal);
        }
        debug!("fan-out produced {} seed nodes", frontier.len());

        let status = &status;
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(frontier.len());
            while let Some(seed) = frontier.pop() {
                handles.push(scope.spawn(move || {
                    let mut private = Frontier::from_root(seed);
                    bfs::search(&mut private, problem, status)
                }));
            }

            let mut solution = None;
            for handle in handles {
                match handle.join() {
                    Ok(result) => solution = solution.or(result),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            solution
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanout_kernel::TransitionModel;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    struct BinaryCounter {
        max: u32,
    }

    impl TransitionModel<u32> for BinaryCounter {
        fn next_states(&self, state: &u32) -> Vec<(u32, u32)> {
            [2 * state + 1, 2 * state + 2]
                .into_iter()
                .filter(|next| *next <= self.max)
                .map(|next| (next, 1))
                .collect()
        }
    }

    fn problem(goals: &[u32]) -> Problem<u32> {
        Problem::new(
            0,
            goals.iter().copied().collect(),
            Box::new(BinaryCounter { max: 126 }),
        )
    }

    #[test]
    fn fork_join_finds_a_valid_goal() {
        let p = problem(&[44]);
        let goal = ForkJoinBfs::new().search(&p).unwrap();
        assert_eq!(*goal.state(), 44);
        assert!(goal
            .path()
            .windows(2)
            .all(|pair| *pair[1] == 2 * pair[0] + 1 || *pair[1] == 2 * pair[0] + 2));
    }

    #[test]
    fn fork_join_root_goal_short_circuits() {
        let p = problem(&[0]);
        let goal = ForkJoinBfs::new().search(&p).unwrap();
        assert!(goal.parent().is_none());
    }

    #[test]
    fn fork_join_exhaustion_returns_none() {
        let p = problem(&[1000]);
        assert!(ForkJoinBfs::new().search(&p).is_none());
    }

    #[test]
    fn fan_out_finds_a_valid_goal() {
        let p = problem(&[97]);
        let goal = FanOutBfs::with_seed_target(8).search(&p).unwrap();
        assert_eq!(*goal.state(), 97);
    }

    #[test]
    fn fan_out_goal_inside_fanout_is_returned_before_any_thread_starts() {
        let p = problem(&[2]);
        let goal = FanOutBfs::with_seed_target(64).search(&p).unwrap();
        assert_eq!(*goal.state(), 2);
        assert_eq!(goal.path_cost(), 1);
    }

    #[test]
    fn fan_out_exhaustion_returns_none() {
        let p = problem(&[1000]);
        assert!(FanOutBfs::with_seed_target(8).search(&p).is_none());
    }

    /// A model that panics below a threshold state.
    struct Exploding;

    impl TransitionModel<u32> for Exploding {
        fn next_states(&self, state: &u32) -> Vec<(u32, u32)> {
            assert!(*state < 6, "transition model exploded");
            [2 * state + 1, 2 * state + 2]
                .into_iter()
                .filter(|next| *next <= 30)
                .map(|next| (next, 1))
                .collect()
        }
    }

    #[test]
    fn task_panics_are_reraised_at_join() {
        let p = Problem::new(0, [1000u32].into_iter().collect(), Box::new(Exploding));
        let result = catch_unwind(AssertUnwindSafe(|| ForkJoinBfs::new().search(&p)));
        assert!(result.is_err(), "panic must cross the join");
    }
}
