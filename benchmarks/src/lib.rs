//! Shared helpers for fanout benchmark suites.
//!
//! Defines the tree scenarios every suite measures against and the roster of
//! strategies under comparison, so the Criterion benches and the auditable
//! report time the same work.

use fanout_harness::{ProceduralTree, RandomTreeBuilder, TreeState};
use fanout_kernel::Problem;
use fanout_search::{
    FanOutBfs, ForkJoinBfs, LayerBfs, PoolBfs, PoolConfig, SearchStrategy, SequentialBfs,
};

/// A named workload: one problem, reused across every strategy.
pub struct Scenario {
    pub name: &'static str,
    pub problem: Problem<TreeState>,
}

/// Complete k-ary tree with the goal on the last branch of the bottom
/// layer, so breadth-first order visits nearly the whole tree first.
fn far_corner_goal(branching: u32, depth: usize) -> Problem<TreeState> {
    let goal = TreeState::new(vec![branching - 1; depth]);
    Problem::new(
        TreeState::root(),
        [goal].into_iter().collect(),
        Box::new(ProceduralTree::new(branching, depth)),
    )
}

/// Wide, shallow tree: 364 states, high per-layer parallelism.
#[must_use]
pub fn scenario_wide_shallow() -> Scenario {
    Scenario {
        name: "wide_shallow",
        problem: far_corner_goal(3, 5),
    }
}

/// Narrow, deep tree: 1023 states, long handoff chains.
#[must_use]
pub fn scenario_narrow_deep() -> Scenario {
    Scenario {
        name: "narrow_deep",
        problem: far_corner_goal(2, 9),
    }
}

/// No goal anywhere: every strategy pays for full exhaustion.
#[must_use]
pub fn scenario_exhaustion() -> Scenario {
    Scenario {
        name: "exhaustion",
        problem: Problem::new(
            TreeState::root(),
            std::collections::HashSet::new(),
            Box::new(ProceduralTree::new(3, 6)),
        ),
    }
}

/// Seeded random tree: irregular branching, goals scattered in depth.
///
/// # Panics
///
/// Panics if the fixed builder parameters are rejected; they are validated
/// constants, so a failure is a programming error in this crate.
#[must_use]
pub fn scenario_random(seed: u64) -> Scenario {
    let problem = RandomTreeBuilder::new(8, 6, 4, 2.5)
        .expect("valid builder parameters")
        .with_seed(seed)
        .build();
    Scenario {
        name: "random_tree",
        problem,
    }
}

/// Every strategy under comparison, in a fixed order.
///
/// # Panics
///
/// Panics if the fixed pool configuration is rejected; it is a validated
/// constant.
#[must_use]
pub fn strategy_roster() -> Vec<Box<dyn SearchStrategy<TreeState>>> {
    vec![
        Box::new(SequentialBfs::new()),
        Box::new(SequentialBfs::with_reached()),
        Box::new(ForkJoinBfs::new()),
        Box::new(FanOutBfs::new()),
        Box::new(LayerBfs::new()),
        Box::new(PoolBfs::with_config(
            PoolConfig::new(4, 16).expect("valid pool configuration"),
        )),
    ]
}
