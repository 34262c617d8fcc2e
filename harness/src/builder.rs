//! Seeded random tree problem builder.

use std::collections::{HashSet, VecDeque};

use fanout_kernel::Problem;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::tree::{BasicTree, TreeState};

/// Invalid random-tree parameters, rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The requested average branching factor exceeds the maximum.
    AverageAboveMax { avg: String, max: u32 },
    /// More goals requested than distinct states exist in the full tree.
    TooManyGoals { requested: usize },
}

impl std::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AverageAboveMax { avg, max } => write!(
                f,
                "average branching factor {avg} exceeds the maximum {max}"
            ),
            Self::TooManyGoals { requested } => write!(
                f,
                "{requested} goals exceed the number of distinct states in the tree"
            ),
        }
    }
}

impl std::error::Error for BuilderError {}

/// Builds random tree problems: a tree grown breadth-first with a random
/// branching factor per node, plus random goal paths.
///
/// Deterministic for a fixed seed (`Pcg64`), so generated problems are
/// reproducible across runs and machines. Goal paths are sampled from the
/// full k-ary space; a goal may land on a branch the random tree did not
/// grow, in which case no strategy will reach it — "no solution" is a
/// normal outcome for these problems.
#[derive(Debug, Clone)]
pub struct RandomTreeBuilder {
    max_depth: usize,
    num_goals: usize,
    max_actions: u32,
    avg_actions: f64,
    seed: u64,
}

impl RandomTreeBuilder {
    /// A builder for trees of `max_depth` with at most `max_actions`
    /// children per node, `avg_actions` children on average, and
    /// `num_goals` random goal states.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError`] if `avg_actions > max_actions` or the goal
    /// count exceeds the number of distinct states in the full tree.
    pub fn new(
        max_depth: usize,
        num_goals: usize,
        max_actions: u32,
        avg_actions: f64,
    ) -> Result<Self, BuilderError> {
        if avg_actions > f64::from(max_actions) {
            return Err(BuilderError::AverageAboveMax {
                avg: avg_actions.to_string(),
                max: max_actions,
            });
        }
        let mut state_count = 0.0_f64;
        let mut layer = 1.0_f64;
        for _ in 0..=max_depth {
            state_count += layer;
            layer *= f64::from(max_actions);
        }
        #[allow(clippy::cast_precision_loss)]
        if num_goals as f64 > state_count {
            return Err(BuilderError::TooManyGoals {
                requested: num_goals,
            });
        }
        Ok(Self {
            max_depth,
            num_goals,
            max_actions,
            avg_actions,
            seed: 0,
        })
    }

    /// Use a specific RNG seed (default 0).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Grow the tree and sample the goals.
    #[must_use]
    pub fn build(&self) -> Problem<TreeState> {
        let mut rng = Pcg64::seed_from_u64(self.seed);
        let tree = self.grow_tree(&mut rng);
        let goals = self.sample_goals(&mut rng);
        Problem::new(TreeState::root(), goals, Box::new(tree))
    }

    /// Breadth-first construction, as the original adjacency list is built:
    /// each visited node draws a branching factor and a random action
    /// sample, and its children join the construction frontier.
    fn grow_tree(&self, rng: &mut Pcg64) -> BasicTree {
        let all_actions: Vec<u32> = (0..self.max_actions).collect();
        let mut tree = BasicTree::new();
        let mut frontier = VecDeque::from([TreeState::root()]);

        while let Some(state) = frontier.pop_front() {
            if state.depth() == self.max_depth {
                break;
            }
            let n = self.sample_branch_factor(rng);
            let actions: Vec<u32> = all_actions.choose_multiple(rng, n).copied().collect();
            for action in &actions {
                frontier.push_back(state.child(*action));
            }
            tree.insert(state, actions);
        }
        tree
    }

    /// Branching factor ~ Binomial(max_actions, avg/max), so the mean is
    /// `avg_actions`.
    fn sample_branch_factor(&self, rng: &mut Pcg64) -> usize {
        if self.max_actions == 0 {
            return 0;
        }
        let p = self.avg_actions / f64::from(self.max_actions);
        (0..self.max_actions).filter(|_| rng.gen_bool(p)).count()
    }

    /// Goal depths ~ Binomial(max_depth, 0.9): most goals sit near the
    /// bottom of the tree, not all at the same depth.
    fn sample_goals(&self, rng: &mut Pcg64) -> HashSet<TreeState> {
        let mut goals = HashSet::with_capacity(self.num_goals);
        while goals.len() < self.num_goals {
            let depth = (0..self.max_depth).filter(|_| rng.gen_bool(0.9)).count();
            let path = (0..depth)
                .map(|_| rng.gen_range(0..self.max_actions))
                .collect();
            goals.insert(TreeState::new(path));
        }
        goals
    }
}
