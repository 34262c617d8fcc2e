//! The sequential baseline strategy.

use std::sync::Arc;

use fanout_kernel::{Node, Problem, SearchState};

use crate::bfs;
use crate::frontier::Frontier;
use crate::status::SearchStatus;
use crate::strategy::SearchStrategy;

/// Single-threaded breadth-first search over one FIFO frontier.
///
/// Deterministic: run twice on the same problem it returns a node with the
/// identical state and path cost both times. The default is tree-like (no
/// duplicate-state detection); [`with_reached`](Self::with_reached) selects
/// the reached-set variant, which is safe here precisely because this
/// strategy never shares its frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialBfs {
    track_reached: bool,
}

impl SequentialBfs {
    /// Tree-like sequential search (no duplicate-state detection).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential search that skips states already reached.
    #[must_use]
    pub fn with_reached() -> Self {
        Self {
            track_reached: true,
        }
    }
}

impl<S: SearchState> SearchStrategy<S> for SequentialBfs {
    fn name(&self) -> &'static str {
        if self.track_reached {
            "sequential-reached"
        } else {
            "sequential"
        }
    }

    fn search(&self, problem: &Problem<S>) -> Option<Arc<Node<S>>> {
        let root = problem.root();
        if self.track_reached {
            return bfs::search_with_reached(root, problem);
        }
        let status = SearchStatus::new();
        let mut frontier = Frontier::from_root(root);
        bfs::search(&mut frontier, problem, &status)
    }
}
