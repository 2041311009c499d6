use indexed_heap::{BatchOrder, Heap, KAry, Orientation};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

const SAMPLE: [u32; 7] = [30, 1, 50, 20, 40, 60, 100];

fn drain<K: Ord, V>(heap: &mut Heap<K, V>) -> Vec<K> {
    std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect()
}

#[test]
fn starts_empty() {
    let mut heap = Heap::<u32, &str>::min();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}

#[test]
fn min_heap_pops_ascending() {
    let mut heap = Heap::min();
    for k in SAMPLE {
        heap.push(k, k);
    }
    assert_eq!(heap.len(), SAMPLE.len());

    let mut sorted = SAMPLE.to_vec();
    sorted.sort_unstable();
    assert_eq!(drain(&mut heap), sorted);
    assert!(heap.is_empty());
}

#[test]
fn max_heap_pops_descending() {
    let mut heap = Heap::max();
    for k in SAMPLE {
        heap.push(k, k);
    }

    let mut sorted = SAMPLE.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drain(&mut heap), sorted);
}

#[test]
fn from_entries_heapifies_arbitrary_input() {
    let mut heap: Heap<u32, u32> = Heap::from_entries(
        Orientation::Min,
        SAMPLE.map(|k| (k, k)),
        BatchOrder::Arbitrary,
    );
    let mut sorted = SAMPLE.to_vec();
    sorted.sort_unstable();
    assert_eq!(drain(&mut heap), sorted);
}

#[test]
fn already_heap_batch_skips_build_and_still_pops_sorted() {
    let mut min: Heap<u32, u32> = Heap::from_entries(
        Orientation::Min,
        (0..9).map(|i| (i, i)),
        BatchOrder::AlreadyHeap,
    );
    assert_eq!(drain(&mut min), (0..9).collect::<Vec<_>>());

    let mut max: Heap<u32, u32> = Heap::from_entries(
        Orientation::Max,
        (0..9).rev().map(|i| (i, i)),
        BatchOrder::AlreadyHeap,
    );
    assert_eq!(drain(&mut max), (0..9).rev().collect::<Vec<_>>());
}

#[test]
fn already_heap_batch_matches_built_batch() {
    let entries: Vec<(u32, u32)> = (0..9).map(|i| (i, i)).collect();
    let fast: Heap<u32, u32> =
        Heap::from_entries(Orientation::Min, entries.clone(), BatchOrder::AlreadyHeap);
    let slow: Heap<u32, u32> =
        Heap::from_entries(Orientation::Min, entries, BatchOrder::Arbitrary);
    assert_eq!(fast.into_sorted_vec(), slow.into_sorted_vec());
}

#[test]
fn four_ary_heap_pops_sorted() {
    let mut heap = Heap::<u32, u32, KAry<4>>::new(Orientation::Max);
    for k in SAMPLE {
        heap.push(k, k);
    }

    let mut sorted = SAMPLE.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let drained: Vec<u32> = std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect();
    assert_eq!(drained, sorted);
}

#[test]
fn eight_ary_heap_pops_sorted() {
    let sample = [30u32, 1, 50, 20, 80, 60, 100];
    let mut heap: Heap<u32, u32, KAry<8>> =
        Heap::from_entries(Orientation::Min, sample.map(|k| (k, k)), BatchOrder::Arbitrary);

    let mut sorted = sample.to_vec();
    sorted.sort_unstable();
    let drained: Vec<u32> = std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect();
    assert_eq!(drained, sorted);
}

#[test]
fn peek_always_matches_next_pop() {
    let mut heap = Heap::max();
    for k in SAMPLE {
        heap.push(k, format!("job-{k}"));
    }
    while let Some((peeked_key, peeked_value)) = heap.peek().map(|(k, v)| (*k, v.clone())) {
        assert_eq!(heap.pop(), Some((peeked_key, peeked_value)));
    }
    assert!(heap.is_empty());
}

#[test]
fn values_ride_along_with_keys() {
    let mut heap = Heap::min();
    heap.push(2, "second");
    heap.push(1, "first");
    heap.push(3, "third");

    assert_eq!(heap.pop(), Some((1, "first")));
    assert_eq!(heap.pop(), Some((2, "second")));
    assert_eq!(heap.pop(), Some((3, "third")));
}

#[test]
fn iter_visits_everything_in_some_order() {
    let mut heap = Heap::min();
    for k in SAMPLE {
        heap.push(k, k);
    }

    let mut seen: Vec<u32> = heap.iter().map(|(k, _)| *k).collect();
    seen.sort_unstable();
    let mut expected = SAMPLE.to_vec();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn extend_pushes_every_entry() {
    let mut heap = Heap::min();
    heap.push(5u32, 5u32);
    heap.extend([(3, 3), (8, 8), (1, 1)]);

    assert_eq!(heap.len(), 4);
    assert_eq!(drain(&mut heap), vec![1, 3, 5, 8]);
}

#[test]
fn clear_empties_and_heap_stays_usable() {
    let mut heap = Heap::max();
    for k in SAMPLE {
        heap.push(k, k);
    }
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);

    heap.push(7, 7);
    assert_eq!(heap.pop(), Some((7, 7)));
}

#[test]
fn with_capacity_preallocates() {
    let heap = Heap::<u32, u32>::with_capacity(Orientation::Min, 32);
    assert!(heap.capacity() >= 32);
    assert!(heap.is_empty());
}

#[test]
fn orientation_is_fixed_at_construction() {
    let heap = Heap::<u32, u32>::min();
    assert_eq!(heap.orientation(), Orientation::Min);
    let heap = Heap::<u32, u32>::max();
    assert_eq!(heap.orientation(), Orientation::Max);
}

#[test]
fn randomized_binary_heap_sorts() {
    let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
    let keys: Vec<u32> = (0..1000).map(|_| rng.gen_range(0..10_000)).collect();

    let mut heap = Heap::min();
    for &k in &keys {
        heap.push(k, k);
    }

    let mut sorted = keys;
    sorted.sort_unstable();
    assert_eq!(drain(&mut heap), sorted);
}

#[test]
fn randomized_kary_heap_sorts() {
    let mut rng = XorShiftRng::seed_from_u64(0xDECADE);
    let keys: Vec<i64> = (0..1000).map(|_| rng.gen_range(-5_000..5_000)).collect();

    let mut heap = Heap::<i64, i64, KAry<3>>::new(Orientation::Max);
    for &k in &keys {
        heap.push(k, k);
    }

    let mut sorted = keys;
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let drained: Vec<i64> = std::iter::from_fn(|| heap.pop()).map(|(k, _)| k).collect();
    assert_eq!(drained, sorted);
}
