//! Property-based tests for RingDeque using proptest
//!
//! Every operation sequence is replayed against `std::collections::VecDeque` through
//! the `AnyDeque` trait, and the representation invariant is re-checked after each step.

use std::collections::VecDeque;

use proptest::prelude::*;

use crate::{AnyDeque, CapacityError, RingDeque};

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Reserve(u8),
    Remove(u8),
    Truncate(u8),
    Get(u8),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        4 => any::<i32>().prop_map(Op::PushFront),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        1 => any::<u8>().prop_map(Op::Reserve),
        1 => any::<u8>().prop_map(Op::Remove),
        1 => any::<u8>().prop_map(Op::Truncate),
        1 => any::<u8>().prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` through the shared trait; `reserve` and `truncate` are inherent methods
/// on both types and are handled by the caller.
fn apply_any(d: &mut dyn AnyDeque<i32>, op: &Op) -> Option<i32> {
    match *op {
        Op::PushBack(v) => {
            d.push_back(v);
            None
        }
        Op::PushFront(v) => {
            d.push_front(v);
            None
        }
        Op::PopBack => d.pop_back(),
        Op::PopFront => d.pop_front(),
        Op::Remove(i) => d.remove(i as usize),
        Op::Get(i) => d.get(i as usize).copied(),
        Op::Clear => {
            d.clear();
            None
        }
        Op::Reserve(_) | Op::Truncate(_) => None,
    }
}

fn assert_shape(d: &RingDeque<i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(d.check_invariant(), Ok(()));
    let raw = d.raw_indices();
    prop_assert_eq!(raw.is_empty(), d.is_empty());
    prop_assert_eq!(raw.is_full(), d.len() == d.capacity());
    prop_assert_eq!(raw.len(), d.len());
    prop_assert_eq!(raw.buffer_capacity - 1, d.capacity());
    Ok(())
}

/// A deque of usable capacity `usable` whose tail sits at `rotate` and holds `items`.
fn rotated(usable: usize, rotate: usize, items: &[i32]) -> RingDeque<i32> {
    let mut d = RingDeque::with_capacity(usable).unwrap();
    for _ in 0..rotate {
        d.push_back(0);
        d.pop_front();
    }
    for &item in items {
        d.push_back(item);
    }
    d
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sequence_matches_vecdeque(
        initial in 0usize..20,
        ops in prop::collection::vec(arb_op(), 1..300),
    ) {
        let mut rd: RingDeque<i32> = RingDeque::with_capacity(initial).unwrap();
        let mut vd: VecDeque<i32> = VecDeque::new();

        for op in &ops {
            match *op {
                Op::Reserve(n) => {
                    let before = rd.capacity();
                    rd.reserve(n as usize).unwrap();
                    vd.reserve(n as usize);
                    prop_assert!(rd.capacity() >= before);
                    prop_assert!(rd.capacity() >= rd.len() + n as usize);
                }
                Op::Truncate(n) => {
                    rd.truncate(n as usize);
                    vd.truncate(n as usize);
                }
                _ => {
                    let got = apply_any(&mut rd, op);
                    let expected = apply_any(&mut vd, op);
                    prop_assert_eq!(got, expected);
                }
            }
            assert_shape(&rd)?;
            prop_assert_eq!(rd.len(), vd.len());
            prop_assert!(rd.iter().eq(vd.iter()));
            prop_assert_eq!(rd.front(), vd.front());
            prop_assert_eq!(rd.back(), vd.back());
        }
    }

    #[test]
    fn prop_push_back_pop_front_is_fifo(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut d = RingDeque::with_capacity(1).unwrap();
        for &item in &items {
            d.push_back(item);
            assert_shape(&d)?;
        }
        let mut out = Vec::new();
        while let Some(item) = d.pop_front() {
            out.push(item);
        }
        prop_assert_eq!(out, items);
    }

    #[test]
    fn prop_push_front_pop_back_is_fifo(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut d = RingDeque::with_capacity(1).unwrap();
        for &item in &items {
            d.push_front(item);
            assert_shape(&d)?;
        }
        let mut out = Vec::new();
        while let Some(item) = d.pop_back() {
            out.push(item);
        }
        prop_assert_eq!(out, items);
    }

    #[test]
    fn prop_push_and_pop_same_end_is_lifo(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut back = RingDeque::new();
        let mut front = RingDeque::new();
        for &item in &items {
            back.push_back(item);
            front.push_front(item);
        }
        let reversed: Vec<i32> = items.iter().rev().copied().collect();
        let from_back: Vec<i32> = std::iter::from_fn(|| back.pop_back()).collect();
        let from_front: Vec<i32> = std::iter::from_fn(|| front.pop_front()).collect();
        prop_assert_eq!(&from_back, &reversed);
        prop_assert_eq!(&from_front, &reversed);
    }

    #[test]
    fn prop_growth_preserves_contents(
        usable in 1usize..32,
        rotate in 0usize..64,
        items in prop::collection::vec(any::<i32>(), 0..32),
        additional in 0usize..256,
    ) {
        let mut d = rotated(usable, rotate, &items);
        let before = d.capacity();
        d.reserve(additional).unwrap();
        assert_shape(&d)?;
        prop_assert!(d.capacity() >= before);
        prop_assert!(d.capacity() >= d.len() + additional);
        prop_assert_eq!(d.iter().copied().collect::<Vec<_>>(), items);
    }

    #[test]
    fn prop_reserve_overflow_is_rejected(
        items in prop::collection::vec(any::<i32>(), 0..16),
        slack in 0usize..16,
    ) {
        let mut d: RingDeque<i32> = items.iter().copied().collect();
        let raw = d.raw_indices();
        let additional = usize::MAX - slack;
        let result = d.reserve(additional);
        prop_assert!(
            matches!(result, Err(CapacityError::CapacityOverflow { .. })),
            "reserve({}) with len {} returned {:?}", additional, items.len(), result
        );
        prop_assert_eq!(d.raw_indices(), raw);
        prop_assert_eq!(d.iter().copied().collect::<Vec<_>>(), items);
    }
}

/// Every buffer up to 32 slots, every tail position, every length and every reserve
/// amount up to twice the buffer.
#[test]
fn exhaustive_small_model_reserve() {
    for usable in [1usize, 3, 7, 15, 31] {
        let slots = usable + 1;
        for rotate in 0..slots {
            for len in 0..=usable {
                let items: Vec<i32> = (0..len as i32).collect();
                for additional in 0..=2 * slots {
                    let mut d = rotated(usable, rotate, &items);
                    assert_eq!(d.raw_indices().buffer_capacity, slots);
                    assert_eq!(d.raw_indices().tail, rotate);

                    d.reserve(additional).unwrap();
                    assert_eq!(d.check_invariant(), Ok(()));
                    assert!(d.capacity() >= len + additional);
                    if len + 1 + additional <= slots {
                        assert_eq!(d.raw_indices().buffer_capacity, slots);
                    }

                    d.push_back(-1);
                    d.push_front(-2);
                    assert_eq!(d.check_invariant(), Ok(()));
                    let mut expected = vec![-2];
                    expected.extend(items.iter().copied());
                    expected.push(-1);
                    assert_eq!(d.iter().copied().collect::<Vec<_>>(), expected);
                }
            }
        }
    }
}
