//! Array-backed m-ary heap
//!
//! [`MaryHeap`] stores a complete m-ary tree in a single `Vec`. For
//! branching factor `m`, the children of the node at index `i` live at
//! `i*m+1 ..= i*m+m` and the parent of `i > 0` lives at `(i-1)/m`. Which
//! element is "top" is decided by a [`Comparator`]; the default [`Less`]
//! gives a min-heap and [`Greater`](crate::compare::Greater) a max-heap.
//!
//! Wider trees are shallower, so `push` does fewer comparisons as `m`
//! grows while `pop` does more (it scans up to `m` children per level).
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `push`    | O(log_m n) amortized|
//! | `pop`     | O(m log_m n)        |
//! | `top`     | O(1)                |
//! | `len`     | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use rust_multiway_heap::{Greater, Heap, MaryHeap};
//!
//! let mut heap = MaryHeap::with_comparator(4, Greater).unwrap();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.push(x).unwrap();
//! }
//!
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.len(), 4);
//! ```

use std::fmt;

use crate::compare::{Comparator, Less};
use crate::config::{HeapConfig, DEFAULT_ARITY};
use crate::traits::{Heap, HeapError};

/// An m-ary heap ordered by a caller-supplied predicate
///
/// The branching factor and the comparator are fixed at construction.
/// A branching factor below 2 is rejected with
/// [`HeapError::InvalidBranchingFactor`]; it is never clamped.
pub struct MaryHeap<T, C = Less> {
    /// The tree buffer; index 0 is the root
    data: Vec<T>,
    arity: usize,
    comparator: C,
}

impl<T, C: Comparator<T> + Default> MaryHeap<T, C> {
    /// Creates an empty binary heap using `C::default()` for ordering
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            arity: DEFAULT_ARITY,
            comparator: C::default(),
        }
    }

    /// Creates an empty heap with branching factor `arity`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidBranchingFactor`] if `arity < 2`.
    pub fn with_arity(arity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(arity, C::default())
    }
}

impl<T, C: Comparator<T>> MaryHeap<T, C> {
    /// Creates an empty heap with branching factor `arity` and the given comparator
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidBranchingFactor`] if `arity < 2`.
    pub fn with_comparator(arity: usize, comparator: C) -> Result<Self, HeapError> {
        Self::from_config(HeapConfig::default().with_arity(arity), comparator)
    }

    /// Creates an empty heap from a [`HeapConfig`]
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidBranchingFactor`] if the configured arity is below 2.
    pub fn from_config(config: HeapConfig, comparator: C) -> Result<Self, HeapError> {
        config.validate()?;
        log::trace!(
            "creating {}-ary heap with capacity {}",
            config.arity,
            config.initial_capacity
        );
        Ok(Self {
            data: Vec::with_capacity(config.initial_capacity),
            arity: config.arity,
            comparator,
        })
    }

    /// Returns the branching factor `m`
    pub fn branching_factor(&self) -> usize {
        self.arity
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops every element, keeping the branching factor and comparator
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the heap-order invariant over the whole tree
    ///
    /// Returns false if any element is strictly preferred over its parent.
    pub fn verify_heap_property(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = self.parent(i);
            !self.comparator.precedes(&self.data[i], &self.data[parent])
        })
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.arity
    }

    #[inline]
    fn first_child(&self, index: usize) -> usize {
        // Saturates past the end of any real buffer instead of wrapping.
        index.saturating_mul(self.arity).saturating_add(1)
    }

    /// Move element at index up while it beats its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self.comparator.precedes(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while some child beats it
    ///
    /// Among equally preferred children the leftmost one is chosen.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let first = self.first_child(index);
            if first >= len {
                break;
            }
            let end = first.saturating_add(self.arity).min(len);

            let mut best = first;
            for child in first + 1..end {
                if self.comparator.precedes(&self.data[child], &self.data[best]) {
                    best = child;
                }
            }

            if self.comparator.precedes(&self.data[best], &self.data[index]) {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Comparator<T>> Heap<T> for MaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> Result<(), HeapError> {
        if self.data.try_reserve(1).is_err() {
            log::warn!("cannot grow heap beyond {} elements", self.data.len());
            return Err(HeapError::Overflow);
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::Underflow)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }
}

impl<T, C: Comparator<T> + Default> Default for MaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for MaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaryHeap")
            .field("arity", &self.arity)
            .field("comparator", &self.comparator)
            .field("data", &self.data)
            .finish()
    }
}
