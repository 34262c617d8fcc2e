//! Fixed-size worker pool with explicit work distribution.
//!
//! A director thread owns the shared pending frontier. It fans out
//! breadth-first until there are enough seed nodes for the pool, hands one
//! seed to each worker, then keeps generating and distributing work until a
//! solution is claimed or the pending frontier drains. Workers run the
//! sequential engine over private frontiers and sleep on a condition
//! variable between work deliveries.

use std::num::NonZeroUsize;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread;

use fanout_kernel::{Node, Problem, SearchState};
use log::{debug, trace};

use crate::bfs;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::status::SearchStatus;
use crate::strategy::SearchStrategy;

fn available_parallelism() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Validated worker-pool parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    num_workers: usize,
    min_seed_nodes: usize,
}

impl PoolConfig {
    /// A pool of `num_workers` workers, fanned out to at least
    /// `min_seed_nodes` seed nodes before any worker starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPoolConfig`] if `num_workers` is zero or
    /// `min_seed_nodes` is below `num_workers` (the director must be able to
    /// seed every worker once).
    pub fn new(num_workers: usize, min_seed_nodes: usize) -> Result<Self, SearchError> {
        if num_workers == 0 {
            return Err(SearchError::InvalidPoolConfig {
                detail: "worker pool size must be non-zero".into(),
            });
        }
        if min_seed_nodes < num_workers {
            return Err(SearchError::InvalidPoolConfig {
                detail: format!(
                    "seed target {min_seed_nodes} is below the pool size {num_workers}"
                ),
            });
        }
        Ok(Self {
            num_workers,
            min_seed_nodes,
        })
    }

    /// Pool size this configuration runs with.
    #[must_use]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Seed nodes the director produces before starting the workers.
    #[must_use]
    pub fn min_seed_nodes(&self) -> usize {
        self.min_seed_nodes
    }
}

impl Default for PoolConfig {
    /// One worker per hardware thread, seed target four times that.
    fn default() -> Self {
        let workers = available_parallelism();
        Self {
            num_workers: workers,
            min_seed_nodes: workers * 4,
        }
    }
}

/// One worker's shared half: a private frontier behind a mutex, and the
/// condition the worker sleeps on while the frontier is empty.
///
/// The frontier is mutated only by its worker and, under the same lock, by
/// the director during handoff — never by another worker.
struct WorkerSlot<S> {
    frontier: Mutex<Frontier<S>>,
    work_ready: Condvar,
}

impl<S: SearchState> WorkerSlot<S> {
    fn new() -> Self {
        Self {
            frontier: Mutex::new(Frontier::new()),
            work_ready: Condvar::new(),
        }
    }

    /// Recover the guard from a poisoned lock: a worker that panicked cannot
    /// have left the frontier structurally broken (push/pop don't unwind
    /// mid-update), and the panic itself is re-raised at join.
    fn lock_frontier(&self) -> MutexGuard<'_, Frontier<S>> {
        self.frontier.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocking handoff, used only before this worker's thread starts.
    fn seed(&self, node: Arc<Node<S>>) {
        self.lock_frontier().push(node);
    }

    /// Non-blocking handoff. If the lock is free the worker is waiting for
    /// work: push the node and wake it. If the lock is held the worker is
    /// busy searching; skip it this round and retry on a later iteration.
    fn offer(&self, node: Arc<Node<S>>) -> bool {
        match self.frontier.try_lock() {
            Ok(mut frontier) => {
                frontier.push(node);
                drop(frontier);
                self.work_ready.notify_one();
                true
            }
            // Poisoned: the worker crashed mid-search. Its panic surfaces at
            // join; until then it can't accept work.
            Err(TryLockError::WouldBlock | TryLockError::Poisoned(_)) => false,
        }
    }

    /// Wake the worker so it re-checks `search_finished`.
    ///
    /// Taking the lock before notifying closes the race with a worker that
    /// has checked its predicate but not yet entered the wait.
    fn wake(&self) {
        drop(self.lock_frontier());
        self.work_ready.notify_one();
    }

    /// The worker loop: wait for work or shutdown, drain the private
    /// frontier with the sequential engine, repeat.
    fn run(&self, problem: &Problem<S>, status: &SearchStatus) -> Option<Arc<Node<S>>> {
        while !status.solution_found() {
            let mut frontier = self.lock_frontier();
            if frontier.is_empty() && status.search_finished() {
                break;
            }
            while frontier.is_empty() && !status.search_finished() {
                frontier = self
                    .work_ready
                    .wait(frontier)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            // Holding the lock for the whole engine run is fine: the frontier
            // is private to this worker, and the director's handoff is a
            // try_lock that treats a held lock as "busy, skip".
            if let Some(goal) = bfs::search(&mut frontier, problem, status) {
                trace!("worker claimed a goal at cost {}", goal.path_cost());
                return Some(goal);
            }
        }
        None
    }
}

/// Worker-pool search: a long-lived fixed-size pool coordinated by a
/// director performing an initial breadth-first fan-out and continuous
/// non-blocking work redistribution.
///
/// The director never blocks on a busy worker — a failed lock attempt means
/// "try again next round", trading immediate balancing for director
/// responsiveness. Tree-like: valid only on problems without reachable
/// cycles. A crashed worker is treated as having reported "no solution, no
/// more work" for termination purposes; its panic is re-raised to the caller
/// after every other worker has been joined.
#[derive(Debug, Clone, Copy)]
pub struct PoolBfs {
    config: PoolConfig,
}

impl PoolBfs {
    /// A pool sized by [`PoolConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PoolConfig::default(),
        }
    }

    /// A pool with explicit, pre-validated parameters.
    #[must_use]
    pub fn with_config(config: PoolConfig) -> Self {
        Self { config }
    }
}

impl Default for PoolBfs {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> SearchStrategy<S> for PoolBfs {
    fn name(&self) -> &'static str {
        "worker-pool"
    }

    fn search(&self, problem: &Problem<S>) -> Option<Arc<Node<S>>> {
        let status = SearchStatus::new();
        let mut main_frontier = Frontier::from_root(problem.root());

        // Initial fan-out: enough seed nodes before any worker starts. A
        // goal found here means no workers are ever spawned.
        if let Some(goal) = bfs::search_with_limit(
            &mut main_frontier,
            problem,
            &status,
            self.config.min_seed_nodes,
        ) {
            return Some(goal);
        }
        if main_frontier.is_empty() {
            // The whole space fit inside the fan-out with no goal.
            return None;
        }
        debug!(
            "fan-out produced {} seed nodes for {} workers",
            main_frontier.len(),
            self.config.num_workers
        );

        let slots: Vec<WorkerSlot<S>> = (0..self.config.num_workers)
            .map(|_| WorkerSlot::new())
            .collect();
        let status = &status;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(slots.len());
            for slot in &slots {
                if let Some(seed) = main_frontier.pop() {
                    slot.seed(seed);
                }
                handles.push(scope.spawn(move || slot.run(problem, status)));
            }

            // While waiting for a solution, keep generating and distributing
            // work.
            let mut solution = None;
            while !status.solution_found() && !main_frontier.is_empty() {
                if let Some(goal) = generate_work(&mut main_frontier, problem, status) {
                    solution = Some(goal);
                    break;
                }
                distribute_work(&mut main_frontier, &slots, status);
            }

            // No more work will ever arrive; let sleeping workers exit.
            status.signal_search_finished();
            for slot in &slots {
                slot.wake();
            }

            let mut worker_panic = None;
            for handle in handles {
                match handle.join() {
                    Ok(Some(goal)) => solution = Some(goal),
                    Ok(None) => {}
                    // Keep joining: the remaining workers still observe
                    // search_finished and exit on their own.
                    Err(payload) => worker_panic = Some(payload),
                }
            }
            if let Some(payload) = worker_panic {
                std::panic::resume_unwind(payload);
            }
            solution
        })
    }
}

/// One bounded expansion step over the pending frontier: grow it by a single
/// node unless a goal turns up first.
fn generate_work<S: SearchState>(
    main_frontier: &mut Frontier<S>,
    problem: &Problem<S>,
    status: &SearchStatus,
) -> Option<Arc<Node<S>>> {
    let limit = main_frontier.len() + 1;
    bfs::search_with_limit(main_frontier, problem, status, limit)
}

/// Try to hand one pending node to each idle worker. Busy workers are
/// skipped; the node stays at the head of the pending frontier until some
/// worker accepts it.
fn distribute_work<S: SearchState>(
    main_frontier: &mut Frontier<S>,
    slots: &[WorkerSlot<S>],
    status: &SearchStatus,
) {
    for slot in slots {
        if status.solution_found() {
            break;
        }
        let Some(next) = main_frontier.front() else {
            break;
        };
        if slot.offer(Arc::clone(next)) {
            let _ = main_frontier.pop();
        }
    }
}
