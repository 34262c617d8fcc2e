//! Fanout harness: concrete problem domains for exercising the search
//! strategies.
//!
//! Provides the tree-shaped domains the strategies are valid on — an
//! explicit adjacency-map tree, a closed-form complete k-ary tree, and a
//! seeded random tree builder — and hosts the cross-strategy integration
//! tests under `tests/`.

#![forbid(unsafe_code)]

pub mod builder;
pub mod tree;

pub use builder::{BuilderError, RandomTreeBuilder};
pub use tree::{BasicTree, ProceduralTree, TreeState};
