//! Ordering predicates
//!
//! A heap decides which element sits closer to the root through a
//! [`Comparator`]: `precedes(a, b)` returns true when `a` must appear above
//! `b`. Only a strict weak ordering is assumed; two elements for which the
//! predicate is false both ways are treated as ties.
//!
//! | Predicate   | Top of the heap |
//! |-------------|-----------------|
//! | [`Less`]    | smallest        |
//! | [`Greater`] | largest         |
//! | closure     | caller-defined  |
//!
//! # Example
//!
//! ```rust
//! use rust_multiway_heap::{Heap, MaryHeap};
//!
//! // Order strings by length, shortest first.
//! let mut heap = MaryHeap::with_comparator(3, |a: &&str, b: &&str| a.len() < b.len()).unwrap();
//! heap.push("three").unwrap();
//! heap.push("one").unwrap();
//! heap.push("fifteen").unwrap();
//! assert_eq!(heap.pop(), Ok("one"));
//! ```

/// Binary ordering predicate used to arrange a heap
pub trait Comparator<T> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Natural "less than" ordering; produces a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

/// Natural "greater than" ordering; produces a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd> Comparator<T> for Less {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd> Comparator<T> for Greater {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
