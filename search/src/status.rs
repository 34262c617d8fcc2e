//! Cancellation coordination for one top-level search invocation.

use std::sync::atomic::{AtomicBool, Ordering};

/// Two independent one-shot cancellation flags shared by every task, thread
/// and worker of a single search invocation.
///
/// - `solution_found` — a solution has been claimed; stop all searching.
/// - `search_finished` — no more work will be produced; stop waiting for
///   work. Signalling a solution implies the search is finished; the reverse
///   does not hold (work can run out with no answer).
///
/// Once signalled, a flag never resets. Cancellation is cooperative and
/// polling-based: strategies check [`solution_found`](Self::solution_found)
/// at every frontier pop and before spawning further work, so cancellation
/// latency is bounded by one node-expansion step.
///
/// # Solution claim contract (FirstToSignal)
///
/// [`try_claim_solution`](Self::try_claim_solution) is an atomic swap:
/// exactly one goal discovery per invocation claims the `solution_found`
/// flag and returns its node; every later discovery observes a lost claim
/// and yields nothing. The returned solution is therefore the first one
/// *signalled*, not the shallowest and not the last one drained.
#[derive(Debug, Default)]
pub struct SearchStatus {
    solution_found: AtomicBool,
    search_finished: AtomicBool,
}

impl SearchStatus {
    /// Fresh status with neither flag signalled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to claim the solution. Returns `true` exactly once per
    /// invocation, for the first caller. Also signals `search_finished`.
    pub fn try_claim_solution(&self) -> bool {
        let first = !self.solution_found.swap(true, Ordering::SeqCst);
        self.search_finished.store(true, Ordering::SeqCst);
        first
    }

    /// Signal that no more work will be produced. Idempotent.
    pub fn signal_search_finished(&self) {
        self.search_finished.store(true, Ordering::SeqCst);
    }

    /// Non-blocking query: has a solution been claimed?
    #[must_use]
    pub fn solution_found(&self) -> bool {
        self.solution_found.load(Ordering::SeqCst)
    }

    /// Non-blocking query: has the search finished producing work?
    #[must_use]
    pub fn search_finished(&self) -> bool {
        self.search_finished.load(Ordering::SeqCst)
    }
}
