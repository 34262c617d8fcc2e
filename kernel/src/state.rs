//! The capability bound for state types.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bound satisfied by every state a search strategy can explore.
///
/// A state is an opaque, immutable, equality-comparable, hashable, printable
/// value owned by value. `Send + Sync + 'static` is part of the bound because
/// every concurrent strategy shares states (through nodes) across threads.
///
/// Blanket-implemented: any type with the listed supertraits qualifies,
/// including primitives like `u32`.
pub trait SearchState: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

impl<T> SearchState for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}
