//! Stress tests that push the queues through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use classic_collections::bounded::BoundedQueue;
use classic_collections::order::{NaturalOrder, Reverse};
use classic_collections::queue::Queue;
use classic_collections::PriorityQueue;

/// Deterministic pseudo-random sequence
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_i32(&mut self, bound: i32) -> i32 {
        ((self.next() >> 33) % bound as u64) as i32
    }
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<Q: PriorityQueue<i32>>(mut queue: Q) {
    for i in (0..10_000).rev() {
        queue.push(i);
    }

    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.pop(), Ok(i));
    }

    assert!(queue.is_empty());
}

/// Test alternating push and pop
fn test_alternating_ops<Q: PriorityQueue<i32>>(mut queue: Q) {
    for i in 0..2_000 {
        queue.push(i * 2);
        queue.push(i * 2 + 1);
        assert_eq!(queue.pop(), Ok(i));
    }

    assert_eq!(queue.len(), 2_000);
    let mut last = i32::MIN;
    while let Ok(v) = queue.pop() {
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn test_queue_massive_operations() {
    test_massive_operations(Queue::<i32>::default());
}

#[test]
fn test_bounded_massive_operations() {
    test_massive_operations(BoundedQueue::new(NaturalOrder, 10_000));
}

#[test]
fn test_queue_alternating_ops() {
    test_alternating_ops(Queue::<i32>::default());
}

#[test]
fn test_random_heap_invariant() {
    let mut rng = Lcg::new(12345);
    let mut queue = Queue::new(|a: &i32, b: &i32| a < b);
    let mut model = Vec::new();

    for round in 0..5_000 {
        if rng.next().is_multiple_of(3) {
            let expected = model.iter().min().copied();
            let got = queue.pop().ok();
            assert_eq!(got, expected, "round {round}");
            if let Some(v) = got {
                let pos = model.iter().position(|&m| m == v).unwrap();
                model.swap_remove(pos);
            }
        } else {
            let v = rng.next_i32(1_000);
            queue.push(v);
            model.push(v);
        }

        if round % 500 == 0 {
            assert!(queue.is_heap(), "heap order broken at round {round}");
        }
    }

    assert_eq!(queue.len(), model.len());
}

#[test]
fn test_bounded_top_k_of_stream() {
    let mut rng = Lcg::new(777);
    let values: Vec<i32> = (0..50_000).map(|_| rng.next_i32(1_000_000)).collect();

    let mut top = BoundedQueue::new(NaturalOrder, 100);
    top.extend(values.iter().copied());

    let mut expected = values.clone();
    expected.sort_unstable();
    expected.truncate(100);
    assert_eq!(top.into_sorted_vec(), expected);
}

#[test]
fn test_bounded_largest_k_with_reverse() {
    let mut top = BoundedQueue::new(Reverse(NaturalOrder), 5);
    top.extend(0..1_000);

    assert_eq!(top.into_sorted_vec(), vec![999, 998, 997, 996, 995]);
}
