//! Fanout kernel: the problem-domain plumbing shared by every search strategy.
//!
//! This crate is dependency-free and knows nothing about threads. It defines
//! the capability bounds a state type must satisfy, the transition-model
//! traits a problem domain implements, and the immutable parent-linked node
//! used to reconstruct solution paths.
//!
//! # Crate dependency graph
//!
//! ```text
//! fanout_kernel  ←  fanout_search  ←  fanout_harness
//! (states, nodes)   (strategies)      (tree domains, builders)
//! ```
//!
//! # Key types
//!
//! - [`SearchState`] — blanket bound for state types
//! - [`TransitionModel`] / [`ActionModel`] — domain capability traits
//! - [`Node`] — immutable `(state, parent, path_cost)` record
//! - [`Problem`] — initial state + goal set + transition model

#![forbid(unsafe_code)]

pub mod node;
pub mod problem;
pub mod state;
pub mod transition;

pub use node::Node;
pub use problem::Problem;
pub use state::SearchState;
pub use transition::{ActionModel, TransitionModel};
