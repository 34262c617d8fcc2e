//! Transition-model capability traits.

use crate::state::SearchState;

/// A domain-supplied function from a state to its reachable successors.
///
/// # Contract
///
/// - `next_states` must be pure: no internal mutable state, same input →
///   same output.
/// - The `Send + Sync` supertraits are load-bearing: every concurrent
///   strategy calls `next_states` from multiple threads simultaneously with
///   no synchronization.
/// - Returned costs are per-step; path accumulation is the caller's job.
pub trait TransitionModel<S: SearchState>: Send + Sync {
    /// All states reachable from `state` in one step, with their step costs.
    fn next_states(&self, state: &S) -> Vec<(S, u32)>;
}

/// Action-factored transition model.
///
/// Domains that think in terms of discrete actions implement this instead of
/// [`TransitionModel`]: enumerate the legal actions, apply one, price one.
/// The blanket impl below derives `next_states` from the triple, so every
/// `ActionModel` is usable wherever a `TransitionModel` is expected.
pub trait ActionModel<S: SearchState>: Send + Sync {
    /// The domain's action representation.
    type Action;

    /// Legal actions in `state`.
    fn actions(&self, state: &S) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &S, action: &Self::Action) -> S;

    /// Cost of taking `action` in `current`, arriving at `next`.
    fn action_cost(&self, current: &S, action: &Self::Action, next: &S) -> u32;
}

impl<S: SearchState, M: ActionModel<S>> TransitionModel<S> for M {
    fn next_states(&self, state: &S) -> Vec<(S, u32)> {
        self.actions(state)
            .into_iter()
            .map(|action| {
                let next = self.result(state, &action);
                let cost = self.action_cost(state, &action, &next);
                (next, cost)
            })
            .collect()
    }
}
