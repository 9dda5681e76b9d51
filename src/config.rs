//! Construction-time configuration for [`MaryHeap`](crate::mary::MaryHeap)

use crate::traits::HeapError;

/// Branching factor used when none is given
pub const DEFAULT_ARITY: usize = 2;

/// Smallest branching factor a heap accepts
pub const MIN_ARITY: usize = 2;

/// Settings fixed when a heap is created
///
/// ```rust
/// use rust_multiway_heap::{HeapConfig, HeapError};
///
/// let config = HeapConfig::default().with_arity(4).with_initial_capacity(64);
/// assert!(config.validate().is_ok());
///
/// let bad = HeapConfig::default().with_arity(1);
/// assert_eq!(bad.validate(), Err(HeapError::InvalidBranchingFactor(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Number of children per node (`m`)
    pub arity: usize,
    /// Number of slots reserved up front
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Sets the branching factor
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Sets the number of slots reserved at construction
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Checks the configuration, rejecting a branching factor below 2
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidBranchingFactor`] carrying the rejected value.
    pub fn validate(&self) -> Result<(), HeapError> {
        if self.arity < MIN_ARITY {
            log::debug!("rejecting heap configuration with arity {}", self.arity);
            return Err(HeapError::InvalidBranchingFactor(self.arity));
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            arity: DEFAULT_ARITY,
            initial_capacity: 0,
        }
    }
}
