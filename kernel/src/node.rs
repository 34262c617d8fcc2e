//! Immutable parent-linked search nodes.

use std::fmt;
use std::sync::Arc;

use crate::state::SearchState;

/// One state reached along one path from a problem's initial state.
///
/// Nodes are immutable after construction and jointly owned by the frontier
/// entries, child nodes, and returned solutions that reference them. Parent
/// chains form a tree of shared ownership and are acyclic by construction:
/// a node is only ever created from an existing parent plus a freshly
/// computed child state, so a parent can never be a descendant of itself.
///
/// Walking `parent` links from any node reachable from a problem's initial
/// state terminates at a root node whose state equals that initial state.
#[derive(Debug)]
pub struct Node<S> {
    state: S,
    parent: Option<Arc<Node<S>>>,
    path_cost: u32,
}

impl<S: SearchState> Node<S> {
    /// A root node: no parent, zero path cost.
    #[must_use]
    pub fn root(state: S) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent: None,
            path_cost: 0,
        })
    }

    /// A child of `parent` reached for `step_cost`. The accumulated path
    /// cost saturates at `u32::MAX` rather than overflowing.
    #[must_use]
    pub fn child(parent: &Arc<Node<S>>, state: S, step_cost: u32) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent: Some(Arc::clone(parent)),
            path_cost: parent.path_cost.saturating_add(step_cost),
        })
    }

    /// The state this node reached.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from (`None` for a root).
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Node<S>>> {
        self.parent.as_ref()
    }

    /// Total cost of the path from the root to this node.
    #[must_use]
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// The states along the path from the root to this node, root first.
    #[must_use]
    pub fn path(&self) -> Vec<&S> {
        let mut states = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            states.push(node.state());
            current = node.parent.as_deref();
        }
        states.reverse();
        states
    }
}

impl<S: SearchState> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for state in self.path() {
            if !first {
                write!(f, " -> ")?;
            }
            first = false;
            write!(f, "{state}")?;
        }
        write!(f, " (cost: {})", self.path_cost)
    }
}
