//! FIFO frontier of not-yet-expanded search nodes.

use std::collections::VecDeque;
use std::sync::Arc;

use fanout_kernel::{Node, SearchState};

/// An ordered sequence of node references with FIFO semantics: push at the
/// tail, pop at the head. FIFO order is what makes the engine breadth-first.
///
/// A frontier is never shared for write access by more than one thread at a
/// time without an explicit lock; in multi-frontier strategies each worker
/// owns one private frontier behind its own mutex.
pub struct Frontier<S> {
    nodes: VecDeque<Arc<Node<S>>>,
}

impl<S: SearchState> Frontier<S> {
    /// An empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    /// A one-element frontier holding `root`.
    #[must_use]
    pub fn from_root(root: Arc<Node<S>>) -> Self {
        Self {
            nodes: VecDeque::from([root]),
        }
    }

    /// Push a node at the tail.
    pub fn push(&mut self, node: Arc<Node<S>>) {
        self.nodes.push_back(node);
    }

    /// Pop the head node.
    #[must_use]
    pub fn pop(&mut self) -> Option<Arc<Node<S>>> {
        self.nodes.pop_front()
    }

    /// Peek at the head node without removing it.
    ///
    /// The director uses this for non-destructive handoff: the node leaves
    /// the frontier only once a worker has accepted it.
    #[must_use]
    pub fn front(&self) -> Option<&Arc<Node<S>>> {
        self.nodes.front()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: SearchState> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
