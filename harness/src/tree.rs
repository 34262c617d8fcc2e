//! Tree-shaped problem domains.
//!
//! States are action paths from the root, so every state is reachable along
//! exactly one path and the space is cycle-free by construction — the shape
//! the tree-like concurrent strategies require.

use std::collections::HashMap;
use std::fmt;

use fanout_kernel::ActionModel;

/// A tree state: the sequence of actions taken from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreeState {
    path: Vec<u32>,
}

impl TreeState {
    /// The root state (empty action path).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// A state from an explicit action path.
    #[must_use]
    pub fn new(path: Vec<u32>) -> Self {
        Self { path }
    }

    /// The state reached by taking `action` here.
    #[must_use]
    pub fn child(&self, action: u32) -> Self {
        let mut path = self.path.clone();
        path.push(action);
        Self { path }
    }

    /// Depth in the tree (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The action path from the root.
    #[must_use]
    pub fn path(&self) -> &[u32] {
        &self.path
    }
}

impl fmt::Display for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for action in &self.path {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{action}")?;
        }
        write!(f, "]")
    }
}

/// An explicit tree as an adjacency map from state to legal actions.
///
/// Children are kept sorted so expansion order — and therefore every
/// sequential run — is deterministic. States absent from the map are
/// leaves.
#[derive(Debug, Clone, Default)]
pub struct BasicTree {
    tree: HashMap<TreeState, Vec<u32>>,
}

impl BasicTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the legal actions at `state` (sorted for determinism).
    pub fn insert(&mut self, state: TreeState, mut actions: Vec<u32>) {
        actions.sort_unstable();
        self.tree.insert(state, actions);
    }

    /// Number of states with recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether any state has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Depth of the deepest recorded state.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.tree.keys().map(TreeState::depth).max().unwrap_or(0)
    }

    /// Largest number of actions recorded at any state.
    #[must_use]
    pub fn max_branch_factor(&self) -> usize {
        self.tree.values().map(Vec::len).max().unwrap_or(0)
    }
}

impl ActionModel<TreeState> for BasicTree {
    type Action = u32;

    fn actions(&self, state: &TreeState) -> Vec<u32> {
        self.tree.get(state).cloned().unwrap_or_default()
    }

    fn result(&self, state: &TreeState, action: &u32) -> TreeState {
        state.child(*action)
    }

    fn action_cost(&self, _current: &TreeState, _action: &u32, _next: &TreeState) -> u32 {
        1
    }
}

/// A complete k-ary tree described in closed form: every state above the
/// depth cutoff offers actions `0..branching`, nothing is stored.
#[derive(Debug, Clone, Copy)]
pub struct ProceduralTree {
    branching: u32,
    max_depth: usize,
}

impl ProceduralTree {
    /// A complete tree with the given branching factor and depth cutoff.
    #[must_use]
    pub fn new(branching: u32, max_depth: usize) -> Self {
        Self {
            branching,
            max_depth,
        }
    }

    /// Total number of states in the tree, saturating on overflow.
    #[must_use]
    pub fn node_count(&self) -> u64 {
        let mut total: u64 = 0;
        let mut layer: u64 = 1;
        for _ in 0..=self.max_depth {
            total = total.saturating_add(layer);
            layer = layer.saturating_mul(u64::from(self.branching));
        }
        total
    }
}

impl ActionModel<TreeState> for ProceduralTree {
    type Action = u32;

    fn actions(&self, state: &TreeState) -> Vec<u32> {
        if state.depth() >= self.max_depth {
            return Vec::new();
        }
        (0..self.branching).collect()
    }

    fn result(&self, state: &TreeState, action: &u32) -> TreeState {
        state.child(*action)
    }

    fn action_cost(&self, _current: &TreeState, _action: &u32, _next: &TreeState) -> u32 {
        1
    }
}
