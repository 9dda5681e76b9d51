//! Generic tests for heap implementations
//!
//! These tests work with any [`Heap`] implementation and exercise the trait
//! interface with the edge cases every heap must get right.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rust_multiway_heap::{Greater, Heap, HeapError, Less, MaryHeap};

fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        out.push(heap.pop().unwrap());
    }
    out
}

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>(mut heap: H) {
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.top(), Err(HeapError::Underflow));
    assert_eq!(heap.pop(), Err(HeapError::Underflow));
    assert!(heap.is_empty());
}

/// Test size accounting across pushes and pops
fn test_size_accounting<H: Heap<i32>>(mut heap: H) {
    let mut expected = 0usize;
    for i in 0..50 {
        heap.push((i * 37) % 23).unwrap();
        expected += 1;
        assert_eq!(heap.len(), expected);
        if i % 3 == 0 {
            heap.pop().unwrap();
            expected -= 1;
            assert_eq!(heap.len(), expected);
        }
        assert_eq!(heap.is_empty(), expected == 0);
    }
    drain(&mut heap);
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(HeapError::Underflow));
}

/// Push a shuffled 1..=100 and check the extraction order
fn test_permutation<H: Heap<i32>>(mut heap: H, seed: u64, expected: &[i32]) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i32> = (1..=100).collect();
    values.shuffle(&mut rng);

    for v in values {
        heap.push(v).unwrap();
    }
    assert_eq!(heap.len(), 100);
    assert_eq!(drain(&mut heap), expected);
}

/// Interleave pushes and pops and compare against a sorted reference
fn test_interleaved<H: Heap<i32>>(mut heap: H) {
    let mut reference: Vec<i32> = Vec::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<i32> = (0..200).map(|i| (i * 7919) % 101).collect();
    values.shuffle(&mut rng);

    for (i, v) in values.into_iter().enumerate() {
        heap.push(v).unwrap();
        reference.push(v);
        if i % 4 == 3 {
            reference.sort_unstable();
            let expected = reference.remove(0);
            assert_eq!(heap.pop(), Ok(expected));
        }
        reference.sort_unstable();
        assert_eq!(heap.top(), Ok(&reference[0]));
    }
}

#[test]
fn test_empty_heap_all_arities() {
    for arity in [2, 3, 4, 7] {
        test_empty_heap(MaryHeap::<i32>::with_arity(arity).unwrap());
        test_empty_heap(MaryHeap::with_comparator(arity, Greater).unwrap());
    }
}

#[test]
fn test_size_accounting_all_arities() {
    for arity in [2, 3, 4, 7] {
        test_size_accounting(MaryHeap::<i32>::with_arity(arity).unwrap());
    }
}

#[test]
fn test_branching_factor_generality() {
    let ascending: Vec<i32> = (1..=100).collect();
    for arity in [2, 3, 4, 7] {
        for seed in 0..5 {
            test_permutation(
                MaryHeap::with_comparator(arity, Less).unwrap(),
                seed,
                &ascending,
            );
        }
    }
}

#[test]
fn test_max_comparator_descends() {
    let descending: Vec<i32> = (1..=100).rev().collect();
    for arity in [2, 3, 4, 7] {
        test_permutation(MaryHeap::with_comparator(arity, Greater).unwrap(), 42, &descending);
    }
}

#[test]
fn test_interleaved_operations() {
    for arity in [2, 3, 5, 16] {
        test_interleaved(MaryHeap::<i32>::with_arity(arity).unwrap());
    }
}

#[test]
fn test_scenario() {
    let mut heap: MaryHeap<i32> = MaryHeap::with_arity(2).unwrap();
    for x in [5, 3, 8, 1, 9, 2] {
        heap.push(x).unwrap();
    }
    assert_eq!(drain(&mut heap), vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_single_element_lifecycle() {
    for arity in [2, 3, 4, 7] {
        let mut heap: MaryHeap<i32> = MaryHeap::with_arity(arity).unwrap();
        heap.push(11).unwrap();
        assert_eq!(heap.pop(), Ok(11));
        assert!(heap.is_empty());
        assert_eq!(heap.top(), Err(HeapError::Underflow));
        assert_eq!(heap.pop(), Err(HeapError::Underflow));
    }
}

#[test]
fn test_invalid_branching_factor() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(
        MaryHeap::with_comparator(1, Greater).map(|h: MaryHeap<i32, Greater>| h.len()),
        Err(HeapError::InvalidBranchingFactor(1))
    );
    assert_eq!(
        MaryHeap::<i32>::with_arity(0).map(|h| h.len()),
        Err(HeapError::InvalidBranchingFactor(0))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(HeapError::Underflow.to_string(), "heap is empty");
    assert_eq!(
        HeapError::InvalidBranchingFactor(1).to_string(),
        "branching factor 1 is invalid (must be at least 2)"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(HeapError::Overflow);
    assert!(boxed.to_string().contains("cannot grow"));
}

#[test]
fn test_struct_elements_with_closure() {
    #[derive(Debug, PartialEq)]
    struct Job {
        name: &'static str,
        priority: u8,
    }

    let mut heap = MaryHeap::with_comparator(3, |a: &Job, b: &Job| a.priority > b.priority).unwrap();
    heap.push(Job { name: "low", priority: 1 }).unwrap();
    heap.push(Job { name: "urgent", priority: 9 }).unwrap();
    heap.push(Job { name: "normal", priority: 5 }).unwrap();

    assert_eq!(heap.top().map(|j| j.name), Ok("urgent"));
    assert_eq!(heap.pop().map(|j| j.name), Ok("urgent"));
    assert_eq!(heap.pop().map(|j| j.name), Ok("normal"));
    assert_eq!(heap.pop().map(|j| j.name), Ok("low"));
}
