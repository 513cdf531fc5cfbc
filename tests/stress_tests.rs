//! Stress tests that push the queues through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use indexed_heaps::array::ArrayPriorityQueue;
use indexed_heaps::indexed::IndexedPriorityQueue;
use indexed_heaps::PriorityQueue;

/// Linear congruential generator for reproducible inputs
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();

    for i in (0..5000).rev() {
        queue.push(i);
    }
    assert_eq!(queue.len(), 5000);

    for i in 0..5000 {
        assert_eq!(queue.pop(), Ok(i));
    }
    assert!(queue.is_empty());
}

/// Test removing values in a scrambled order
fn test_scrambled_removals<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    let mut rng = Lcg::new(7);
    let mut values: Vec<i32> = (0..2000).map(|_| rng.below(500) as i32).collect();
    for &value in &values {
        queue.push(value);
    }

    // Fisher-Yates with the same generator
    for i in (1..values.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        values.swap(i, j);
    }

    for (removed, value) in values.iter().enumerate() {
        assert!(queue.remove(value));
        if removed % 97 == 0 {
            assert!(queue.is_min_heap(0));
        }
    }
    assert!(queue.is_empty());
}

/// Test random positional removals interleaved with pushes
fn test_random_remove_at<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    let mut rng = Lcg::new(42);
    let mut len = 0usize;

    for round in 0..3000 {
        if len == 0 || rng.below(3) != 0 {
            queue.push(rng.below(1000) as i32);
            len += 1;
        } else {
            let pos = rng.below(len as u64) as usize;
            assert!(queue.remove_at(pos).is_ok());
            len -= 1;
        }
        if round % 101 == 0 {
            assert!(queue.is_min_heap(0));
        }
    }
    assert_eq!(queue.len(), len);

    let sorted = queue.into_sorted_vec();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}

/// Test heavy duplication
fn test_heavy_duplicates<Q: PriorityQueue<i32>>() {
    let mut queue = Q::new();
    for i in 0..3000 {
        queue.push(i % 3);
    }
    for _ in 0..1000 {
        assert!(queue.remove(&1));
    }
    assert!(!queue.contains(&1));
    assert!(queue.is_min_heap(0));

    let sorted = queue.into_sorted_vec();
    assert_eq!(sorted.len(), 2000);
    assert!(sorted[..1000].iter().all(|&v| v == 0));
    assert!(sorted[1000..].iter().all(|&v| v == 2));
}

#[test]
fn test_indexed_massive() {
    test_massive_operations::<IndexedPriorityQueue<i32>>();
}

#[test]
fn test_array_massive() {
    test_massive_operations::<ArrayPriorityQueue<i32>>();
}

#[test]
fn test_indexed_scrambled_removals() {
    test_scrambled_removals::<IndexedPriorityQueue<i32>>();
}

#[test]
fn test_array_scrambled_removals() {
    test_scrambled_removals::<ArrayPriorityQueue<i32>>();
}

#[test]
fn test_indexed_random_remove_at() {
    test_random_remove_at::<IndexedPriorityQueue<i32>>();
}

#[test]
fn test_array_random_remove_at() {
    test_random_remove_at::<ArrayPriorityQueue<i32>>();
}

#[test]
fn test_indexed_heavy_duplicates() {
    test_heavy_duplicates::<IndexedPriorityQueue<i32>>();
}

#[test]
fn test_array_heavy_duplicates() {
    test_heavy_duplicates::<ArrayPriorityQueue<i32>>();
}

#[test]
fn test_indexed_stays_consistent_under_churn() {
    let initial: Vec<i32> = (0..1000).map(|i| (i * 7919) % 257).collect();
    let mut queue = IndexedPriorityQueue::from(initial);
    let mut rng = Lcg::new(99);

    for round in 0..2000 {
        match rng.below(4) {
            0 => queue.push(rng.below(257) as i32),
            1 => {
                let _ = queue.pop();
            }
            2 => {
                let _ = queue.remove(&(rng.below(257) as i32));
            }
            _ => {
                if !queue.is_empty() {
                    let pos = rng.below(queue.len() as u64) as usize;
                    assert!(queue.remove_at(pos).is_ok());
                }
            }
        }
        if round % 50 == 0 {
            assert!(queue.is_min_heap(0));
            assert!(queue.is_index_consistent());
        }
    }
    assert!(queue.is_index_consistent());
}
