use super::*;
use proptest::{prelude::*, test_runner::TestRunner};
use rand::{seq::SliceRandom, thread_rng, Rng};

fn heap_ordered<T: Ord>(heap: &MinHeap<T>) -> bool {
    let elements = heap.as_slice();
    (1..elements.len()).all(|i| elements[parent(i)] <= elements[i])
}

fn drain<T: Ord>(heap: &mut MinHeap<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(min) = heap.remove_min() {
        out.push(min);
    }
    out
}

#[test]
fn add_then_drain() {
    let mut h: MinHeap<i32> = MinHeap::new();
    for value in [5, 3, 8, 1] {
        h.add(value);
    }
    assert_eq!(h.remove_min(), Ok(1));
    assert_eq!(h.remove_min(), Ok(3));
    assert_eq!(h.remove_min(), Ok(5));
    assert_eq!(h.remove_min(), Ok(8));
    assert_eq!(h.remove_min(), Err(Error::EmptyHeap));
}

#[test]
fn add_sifts_up() {
    let mut h: MinHeap<i32> = MinHeap::new();
    assert!(h.is_empty());
    for value in [1, 40, 25, 15, 12, 10, 8, 7, 6, 56] {
        h.add(value);
        assert!(heap_ordered(&h));
    }
    assert_eq!(h.as_slice(), &[1, 6, 8, 7, 15, 25, 10, 40, 12, 56]);
    assert_eq!(h.to_string(), "HEAP [1, 6, 8, 7, 15, 25, 10, 40, 12, 56]");
}

#[test]
fn equal_values_stay_below_parent() {
    let mut h: MinHeap<i32> = MinHeap::new_from([2, 2]);
    h.add(2);
    assert_eq!(h.as_slice(), &[2, 2, 2]);
}

#[test]
fn strings() {
    let mut h: MinHeap<&str> = MinHeap::new_from(["fish", "bird"]);
    assert_eq!(h.as_slice(), &["bird", "fish"]);
    for value in ["monkey", "zebra", "elephant", "horse", "bear"] {
        h.add(value);
    }
    assert_eq!(h.get_min(), Ok(&"bear"));
    assert!(heap_ordered(&h));
    assert_eq!(
        drain(&mut h),
        vec!["bear", "bird", "elephant", "fish", "horse", "monkey", "zebra"]
    );
}

#[test]
fn get_min_on_empty() {
    let h: MinHeap<i32> = MinHeap::new_from(Vec::new());
    assert_eq!(h.get_min(), Err(Error::EmptyHeap));
    assert_eq!(h.get_min(), Err(Error::EmptyHeap));
}

#[test]
fn remove_min_with_duplicates() {
    let mut h: MinHeap<i32> = MinHeap::new_from([40, 15, 15, 15, 15]);
    assert_eq!(drain(&mut h), vec![15, 15, 15, 15, 40]);

    let mut h: MinHeap<i32> = MinHeap::new_from([8, 12, 19, 20, 15, 32, 25]);
    assert_eq!(h.remove_min(), Ok(8));
    assert_eq!(h.as_slice(), &[12, 15, 19, 20, 25, 32]);
}

#[test]
fn remove_min_left_child_only() {
    // after removal the root has a left child and no right child
    let mut h: MinHeap<i32> = MinHeap::new_from([1, 3, 2]);
    assert_eq!(h.remove_min(), Ok(1));
    assert_eq!(h.as_slice(), &[2, 3]);

    let mut h: MinHeap<i32> = MinHeap::new_from([1, 2, 3]);
    assert_eq!(h.remove_min(), Ok(1));
    assert_eq!(h.as_slice(), &[2, 3]);
}

// orders by key only, so equal keys with different tags are indistinguishable to the heap
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    tag: char,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

fn tags(h: &MinHeap<Tagged>) -> String {
    h.as_slice().iter().map(|t| t.tag).collect()
}

#[test]
fn tie_prefers_left_child() {
    let t = |key, tag| Tagged { key, tag };
    let mut h: MinHeap<Tagged> = MinHeap::new();
    h.build_heap(&[t(9, 'r'), t(1, 'a'), t(1, 'b')]);
    assert_eq!(tags(&h), "arb");

    // remove_min applies the same rule
    let mut h: MinHeap<Tagged> =
        MinHeap::new_from([t(0, 'x'), t(5, 'l'), t(5, 'r'), t(6, 'z')]);
    assert_eq!(h.remove_min().map(|m| m.tag), Ok('x'));
    assert_eq!(tags(&h), "lzr");
}

#[test]
fn equal_child_moves_up_on_removal() {
    let t = |key, tag| Tagged { key, tag };
    let mut h: MinHeap<Tagged> =
        MinHeap::new_from([t(0, 'x'), t(3, 'c'), t(4, 'd'), t(3, 'e')]);
    assert_eq!(tags(&h), "xcde");
    assert_eq!(h.remove_min().map(|m| m.tag), Ok('x'));
    // the sifted node trades places with a child that is only equal to it
    assert_eq!(tags(&h), "ced");
}

#[test]
fn build_heap_replaces_contents() {
    let mut da: DynamicArray<i32> =
        DynamicArray::from(vec![32, 12, 2, 8, 16, 20, 24, 40, 4, 10, 9]);
    let h: MinHeap<&str> = MinHeap::new_from(["zebra", "apple"]);
    assert_eq!(h.to_string(), "HEAP [\"apple\", \"zebra\"]");

    let mut h: MinHeap<i32> = MinHeap::new_from([100, 200]);
    h.build_heap(da.as_slice());
    assert_eq!(h.as_slice(), &[2, 4, 20, 8, 9, 32, 24, 40, 12, 10, 16]);
    assert!(heap_ordered(&h));

    // the heap holds a snapshot, not a view
    da.set_at_index(0, 500).unwrap();
    assert_eq!(da[0], 500);
    assert_eq!(h.as_slice()[5], 32);
    assert!(!h.as_slice().contains(&500));
}

#[test]
fn build_heap_small_inputs() {
    let mut h: MinHeap<i32> = MinHeap::new_from([3, 1]);
    h.build_heap(&[]);
    assert!(h.is_empty());
    h.build_heap(&[7]);
    assert_eq!(h.get_min(), Ok(&7));
    h.build_heap(&[7, 3]);
    assert_eq!(h.as_slice(), &[3, 7]);
}

#[test]
fn shuffled_build_heap_drains_sorted() {
    let mut rng = thread_rng();
    let mut values: Vec<u32> = (0..500).map(|_| rng.gen_range(0..100)).collect();
    values.shuffle(&mut rng);
    let mut h: MinHeap<u32> = MinHeap::new();
    h.build_heap(&values);
    assert!(heap_ordered(&h));
    values.sort_unstable();
    assert_eq!(drain(&mut h), values);
}

#[test]
fn heap_order_under_mixed_operations() {
    #[derive(Debug, Clone)]
    enum Op {
        Add(i16),
        RemoveMin,
        Build(Vec<i16>),
    }
    let arb_op = prop_oneof![
        5 => any::<i16>().prop_map(Op::Add),
        3 => Just(Op::RemoveMin),
        1 => prop::collection::vec(any::<i16>(), 0..32).prop_map(Op::Build),
    ];

    let mut runner = TestRunner::default();
    runner
        .run(&prop::collection::vec(arb_op, 0..64), |ops| {
            let mut h: MinHeap<i16> = MinHeap::new();
            let mut model: Vec<i16> = Vec::new();
            for op in ops {
                match op {
                    Op::Add(x) => {
                        h.add(x);
                        model.push(x);
                    }
                    Op::RemoveMin => {
                        model.sort_unstable();
                        if model.is_empty() {
                            prop_assert_eq!(h.remove_min(), Err(Error::EmptyHeap));
                        } else {
                            prop_assert_eq!(h.remove_min(), Ok(model.remove(0)));
                        }
                    }
                    Op::Build(values) => {
                        h.build_heap(&values);
                        model = values;
                    }
                }
                prop_assert!(heap_ordered(&h));
                prop_assert_eq!(h.len(), model.len());
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn build_heap_matches_repeated_add() {
    let mut runner = TestRunner::default();
    runner
        .run(&prop::collection::vec(any::<i32>(), 0..100), |values| {
            let mut built: MinHeap<i32> = MinHeap::new();
            built.build_heap(&values);
            prop_assert!(heap_ordered(&built));
            let mut added: MinHeap<i32> = values.iter().copied().collect();

            let mut sorted = values.clone();
            sorted.sort();
            let built = drain(&mut built);
            prop_assert_eq!(&built, &sorted);
            prop_assert_eq!(built, drain(&mut added));
            Ok(())
        })
        .unwrap();
}
