//! Fanout search: strategies that parallelize breadth-first exploration
//! while preserving first-solution semantics.
//!
//! Every strategy shares one contract — [`SearchStrategy::search`] takes an
//! immutable [`Problem`](fanout_kernel::Problem) and returns the goal node it
//! claimed, or `None` once the space is exhausted — so a harness can benchmark
//! them interchangeably.
//!
//! All concurrent strategies are **tree-like**: they perform no duplicate-state
//! detection, deliberately, to avoid cross-thread synchronization on a reached
//! set. They are only valid on problems whose state space has no cycles
//! reachable from the initial state. The single-threaded reached-set variant
//! lives in [`bfs::search_with_reached`].
//!
//! # Strategies
//!
//! - [`SequentialBfs`] — the baseline FIFO frontier loop
//! - [`ForkJoinBfs`] — recursive task-per-branch over scoped threads
//! - [`FanOutBfs`] — bounded fan-out, then one thread per seed node
//! - [`LayerBfs`] — bulk data-parallel layer expansion on rayon
//! - [`PoolBfs`] — fixed-size worker pool with a work-distributing director

#![forbid(unsafe_code)]

pub mod bfs;
pub mod error;
pub mod fork_join;
pub mod frontier;
pub mod layered;
pub mod pool;
pub mod sequential;
pub mod status;
pub mod strategy;

pub use error::SearchError;
pub use fork_join::{FanOutBfs, ForkJoinBfs};
pub use frontier::Frontier;
pub use layered::LayerBfs;
pub use pool::{PoolBfs, PoolConfig};
pub use sequential::SequentialBfs;
pub use status::SearchStatus;
pub use strategy::SearchStrategy;
