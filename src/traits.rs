//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait implemented by the containers in
//! this crate, together with the [`HeapError`] type their fallible
//! operations return.
//!
//! Unlike `std::collections::BinaryHeap`, accessing or removing the top of
//! an empty heap is reported as an error ([`HeapError::Underflow`]) rather
//! than as `None`. The non-failing [`Heap::peek`] is provided for callers
//! that prefer an `Option`.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap holding no elements
    Underflow,
    /// The backing storage could not grow to accept another element
    Overflow,
    /// A branching factor below the minimum of 2 was requested
    InvalidBranchingFactor(usize),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap is empty"),
            HeapError::Overflow => write!(f, "heap storage cannot grow any further"),
            HeapError::InvalidBranchingFactor(m) => {
                write!(f, "branching factor {} is invalid (must be at least 2)", m)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority heaps
///
/// The element itself carries its priority; which element counts as "top"
/// is decided by the heap's ordering predicate.
///
/// # Example
///
/// ```rust
/// use rust_multiway_heap::{Heap, HeapError, MaryHeap};
///
/// let mut heap: MaryHeap<i32> = MaryHeap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// heap.pop().unwrap();
/// heap.pop().unwrap();
/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns [`HeapError::Overflow`] if the backing storage cannot grow.
    /// The heap keeps its previous contents in that case.
    fn push(&mut self, item: T) -> Result<(), HeapError>;

    /// Returns the top priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes the top priority element and hands it to the caller
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is
    /// left untouched.
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Like [`Heap::top`], but maps an empty heap to `None`
    fn peek(&self) -> Option<&T> {
        self.top().ok()
    }
}
