//! m-ary Priority Heaps for Rust
//!
//! This crate provides [`MaryHeap`], an array-backed heap whose nodes have
//! up to `m` children, ordered by a caller-supplied predicate.
//!
//! # Features
//!
//! - **Any branching factor**: `m >= 2`, fixed at construction; smaller values are rejected
//! - **Any ordering**: [`Less`] (min-heap, the default), [`Greater`] (max-heap), or a closure
//! - **Explicit failures**: `top`/`pop` on an empty heap return [`HeapError::Underflow`];
//!   a push the storage cannot hold returns [`HeapError::Overflow`]
//! - **Deterministic ties**: sift-down picks the leftmost of equally preferred children
//!
//! The [`partition`] module carries a small owned linked list with an
//! order-preserving pivot split.
//!
//! # Example
//!
//! ```rust
//! use rust_multiway_heap::{Heap, MaryHeap};
//!
//! let mut heap: MaryHeap<i32> = MaryHeap::with_arity(3).unwrap();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.push(x).unwrap();
//! }
//!
//! let mut out = Vec::new();
//! while let Ok(x) = heap.pop() {
//!     out.push(x);
//! }
//! assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
//! ```

pub mod compare;
pub mod config;
pub mod mary;
pub mod partition;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Comparator, Greater, Less};
pub use config::HeapConfig;
pub use mary::MaryHeap;
pub use traits::{Heap, HeapError};
