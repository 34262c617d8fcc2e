//! Typed search errors.
//!
//! `SearchError` covers construction-time failures only. "No solution
//! exists" is not an error — strategies return `None` once their frontiers
//! are exhausted. Transition-model failures are panics and propagate (or are
//! re-raised at join); they are never converted into this type.

/// Typed failure for invalid search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A worker-pool parameter that cannot produce a runnable pool.
    InvalidPoolConfig { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPoolConfig { detail } => {
                write!(f, "invalid worker pool configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
