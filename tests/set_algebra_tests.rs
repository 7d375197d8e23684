use orderly::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn collection(items: &[i32], unique: bool) -> OrderedCollection<i32> {
    let mut collection = OrderedCollection::sorted(Natural, unique);
    collection.push_multiple(items.iter().copied());
    collection
}

#[rstest]
#[case::interleaved(&[1, 3, 5], &[2, 3, 4], true, &[1, 2, 3, 4, 5])]
#[case::interleaved_keep_ties(&[1, 3, 5], &[2, 3, 4], false, &[1, 2, 3, 3, 4, 5])]
#[case::disjoint_left_first(&[1, 2], &[7, 8], true, &[1, 2, 7, 8])]
#[case::disjoint_right_first(&[7, 8], &[1, 2], false, &[1, 2, 7, 8])]
#[case::identical(&[1, 2], &[1, 2], true, &[1, 2])]
#[case::identical_keep_ties(&[1, 2], &[1, 2], false, &[1, 1, 2, 2])]
#[case::empty_left(&[], &[4, 5], true, &[4, 5])]
#[case::empty_right(&[4, 5], &[], true, &[4, 5])]
#[case::both_empty(&[], &[], false, &[])]
fn test_add(
    #[case] left: &[i32],
    #[case] right: &[i32],
    #[case] unique: bool,
    #[case] expected: &[i32],
) {
    let a = collection(left, true);
    let b = collection(right, true);

    let merged = a.add(&b, unique).unwrap();
    assert_eq!(merged.to_vec(), expected);
    assert!(merged.is_sorted());
    assert_eq!(merged.is_unique(), unique);

    // Operands are untouched.
    assert_eq!(a.to_vec(), left);
    assert_eq!(b.to_vec(), right);
}

#[rstest]
#[case::interleaved(&[1, 3, 5], &[2, 3, 4], &[1, 5])]
#[case::disjoint(&[1, 2], &[7, 8], &[1, 2])]
#[case::everything(&[1, 2, 3], &[1, 2, 3], &[])]
#[case::superset(&[2], &[1, 2, 3], &[])]
#[case::tail_survives(&[1, 5, 9, 10], &[5], &[1, 9, 10])]
#[case::empty_left(&[], &[1], &[])]
#[case::empty_right(&[1, 2], &[], &[1, 2])]
fn test_sub(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    let a = collection(left, true);
    let b = collection(right, true);

    let difference = a.sub(&b).unwrap();
    assert_eq!(difference.to_vec(), expected);
    assert!(difference.is_sorted());
    assert!(difference.is_unique());
    assert_eq!(a.to_vec(), left);
}

#[test]
fn test_sub_cancels_one_occurrence_per_match() {
    let a = collection(&[1, 2, 2, 3], false);
    let b = collection(&[2], false);

    assert_eq!(a.sub(&b).unwrap().to_vec(), vec![1, 2, 3]);
    assert!(!a.sub(&b).unwrap().is_unique());
}

#[test]
fn test_degenerate_results_do_not_alias() {
    let a = collection(&[1, 2], true);
    let empty = collection(&[], true);

    let mut merged = a.add(&empty, true).unwrap();
    merged.include(0);
    let mut difference = a.sub(&empty).unwrap();
    difference.exclude(&1);

    assert_eq!(a.to_vec(), vec![1, 2]);
    assert_eq!(merged.to_vec(), vec![0, 1, 2]);
    assert_eq!(difference.to_vec(), vec![2]);
}

#[test]
fn test_unsorted_receiver_is_rejected() {
    let mut unsorted = OrderedCollection::with_comparator(Natural);
    unsorted.push_multiple([3, 1]);
    let sorted = collection(&[1, 2], true);

    assert_eq!(unsorted.add(&sorted, true).unwrap_err(), Error::NotSorted);
    assert_eq!(unsorted.sub(&sorted).unwrap_err(), Error::NotSorted);

    // An empty unsorted receiver is still a misuse, not an empty result.
    let empty: OrderedCollection<i32> = OrderedCollection::new();
    assert_eq!(empty.sub(&sorted).unwrap_err(), Error::NotSorted);
}

#[test]
fn test_merge_result_uses_receiver_comparator() {
    let mut a = OrderedCollection::sorted(Reverse(Natural), true);
    a.push_multiple([1, 5, 3]);
    let mut b = OrderedCollection::sorted(Reverse(Natural), true);
    b.push_multiple([4, 2]);

    let mut merged = a.add(&b, true).unwrap();
    assert_eq!(merged.to_vec(), vec![5, 4, 3, 2, 1]);
    merged.include(6);
    assert_eq!(merged.first(), Some(&6));
}

#[test]
fn test_fuzz_against_btree() {
    use std::collections::BTreeSet;

    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let left: BTreeSet<u16> = (0..rng.random_range(0..100))
            .map(|_| rng.random_range(0..200))
            .collect();
        let right: BTreeSet<u16> = (0..rng.random_range(0..100))
            .map(|_| rng.random_range(0..200))
            .collect();

        let mut a = OrderedCollection::sorted(Natural, true);
        a.push_multiple(left.iter().copied());
        let mut b = OrderedCollection::sorted(Natural, true);
        b.push_multiple(right.iter().copied());

        let union: Vec<u16> = left.union(&right).copied().collect();
        assert_eq!(a.add(&b, true).unwrap().to_vec(), union);

        let mut with_ties: Vec<u16> = left.iter().chain(right.iter()).copied().collect();
        with_ties.sort();
        assert_eq!(a.add(&b, false).unwrap().to_vec(), with_ties);

        let difference: Vec<u16> = left.difference(&right).copied().collect();
        assert_eq!(a.sub(&b).unwrap().to_vec(), difference);
    }
}
