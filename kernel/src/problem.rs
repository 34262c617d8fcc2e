//! A search problem: initial state, goal set, transition model.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::node::Node;
use crate::state::SearchState;
use crate::transition::TransitionModel;

/// An immutable search problem handed by shared reference to whichever
/// strategy is under test.
///
/// Strategies never mutate a problem; the transition model is behind a
/// `Send + Sync` trait object so every thread may call it concurrently.
pub struct Problem<S: SearchState> {
    initial: S,
    goals: HashSet<S>,
    model: Box<dyn TransitionModel<S>>,
}

impl<S: SearchState> Problem<S> {
    /// Bundle an initial state, a set of goal states, and a transition model.
    #[must_use]
    pub fn new(
        initial: S,
        goals: HashSet<S>,
        model: Box<dyn TransitionModel<S>>,
    ) -> Self {
        Self {
            initial,
            goals,
            model,
        }
    }

    /// The state every search starts from.
    #[must_use]
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// A fresh root node for the initial state.
    #[must_use]
    pub fn root(&self) -> Arc<Node<S>> {
        Node::root(self.initial.clone())
    }

    /// The goal states.
    #[must_use]
    pub fn goal_states(&self) -> &HashSet<S> {
        &self.goals
    }

    /// Set-membership goal test.
    #[must_use]
    pub fn is_goal(&self, state: &S) -> bool {
        self.goals.contains(state)
    }

    /// Turn one node into its successor nodes.
    ///
    /// Each `(next_state, cost)` from the transition model becomes a child
    /// with `parent = node` and `path_cost = node.path_cost + cost`.
    #[must_use]
    pub fn expand(&self, node: &Arc<Node<S>>) -> Vec<Arc<Node<S>>> {
        self.model
            .next_states(node.state())
            .into_iter()
            .map(|(state, cost)| Node::child(node, state, cost))
            .collect()
    }
}

impl<S: SearchState> fmt::Display for Problem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Initial state: {}\nGoal state(s):", self.initial)?;
        for goal in &self.goals {
            write!(f, "\n - {goal}")?;
        }
        Ok(())
    }
}
