//! Singly linked list with an order-preserving pivot partition
//!
//! [`partition`] splits a [`List`] into the nodes whose value is at most a
//! pivot and the nodes whose value is greater, keeping the relative order
//! inside each half. Nodes are relinked, never copied, so it works for
//! values that are neither `Clone` nor cheap to move.
//!
//! The walk is iterative with an append cursor per output list, and
//! [`List`] drops its nodes in a loop, so neither depends on the call stack
//! growing with the list length.
//!
//! # Example
//!
//! ```rust
//! use rust_multiway_heap::partition::{partition, List};
//!
//! let list: List<i32> = [2, 4, 8, 3].into_iter().collect();
//! let (smaller, larger) = partition(list, &5);
//! assert_eq!(smaller.into_vec(), vec![2, 4, 3]);
//! assert_eq!(larger.into_vec(), vec![8]);
//! ```

use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A list node owning its successor
pub struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

/// An owned singly linked list
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes (O(n))
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first node, if any
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Prepends a value
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Removes and returns the first value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            node.value
        })
    }

    /// Iterates over the values front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Consumes the list, returning its values front to back
    pub fn into_vec(mut self) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(value) = self.pop_front() {
            out.push(value);
        }
        out
    }
}

/// Splits `list` around `pivot`
///
/// The first returned list holds every node with `value <= pivot`, the
/// second every node with `value > pivot`, each in its original relative
/// order. Values that are unordered with respect to the pivot (such as NaN)
/// go to the second list.
pub fn partition<T: PartialOrd>(mut list: List<T>, pivot: &T) -> (List<T>, List<T>) {
    let mut smaller = List::new();
    let mut larger = List::new();
    let (mut small_count, mut large_count) = (0usize, 0usize);

    {
        let mut smaller_tail = &mut smaller.head;
        let mut larger_tail = &mut larger.head;
        let mut rest = list.head.take();

        while let Some(mut node) = rest {
            rest = node.next.take();
            if node.value <= *pivot {
                smaller_tail = &mut smaller_tail.insert(node).next;
                small_count += 1;
            } else {
                larger_tail = &mut larger_tail.insert(node).next;
                large_count += 1;
            }
        }
    }

    log::trace!(
        "partitioned list into {} smaller-or-equal and {} larger nodes",
        small_count,
        large_count
    );
    (smaller, larger)
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
        }
        list
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
