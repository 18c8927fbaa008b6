//! Property-based tests for ImmutableSequence.
//!
//! These tests verify the indexing and growth properties of the sequence
//! and the algebraic laws for the type classes it implements.

use oak::sequence::ImmutableSequence;
use oak::typeclass::{Foldable, Monoid, Semigroup};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating ImmutableSequence
// =============================================================================

/// Generates the elements and the `ImmutableSequence<i32>` built from them.
fn sequence_with_source(
    max_size: usize,
) -> impl Strategy<Value = (Vec<i32>, ImmutableSequence<i32>)> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|elements| {
        let sequence = ImmutableSequence::from_slice(&elements);
        (elements, sequence)
    })
}

/// Generates a small `ImmutableSequence<i32>` for faster tests.
fn small_sequence() -> impl Strategy<Value = ImmutableSequence<i32>> {
    prop::collection::vec(any::<i32>(), 0..20).prop_map(ImmutableSequence::from)
}

proptest! {
    // =========================================================================
    // Indexing Properties
    // =========================================================================

    #[test]
    fn prop_get_round_trips_input((elements, sequence) in sequence_with_source(30)) {
        prop_assert_eq!(sequence.len(), elements.len());
        for index in sequence.indices() {
            prop_assert_eq!(sequence.get(index), &elements[index]);
        }
    }

    #[test]
    fn prop_indices_cover_exactly_valid_range(sequence in small_sequence()) {
        let indices = sequence.indices();
        prop_assert_eq!(indices.start, 0);
        prop_assert_eq!(indices.end, sequence.len());
        prop_assert_eq!(indices.is_empty(), sequence.is_empty());
    }

    #[test]
    fn prop_get_checked_fails_outside_indices(sequence in small_sequence(), offset in 0usize..10) {
        let index = sequence.len() + offset;
        prop_assert!(sequence.get_checked(index).is_err());
    }

    #[test]
    fn prop_iter_matches_indexed_reads(sequence in small_sequence()) {
        let by_index: Vec<&i32> = sequence.indices().map(|index| sequence.get(index)).collect();
        let by_iter: Vec<&i32> = sequence.iter().collect();
        prop_assert_eq!(by_index, by_iter);
    }

    #[test]
    fn prop_try_from_options_rejects_first_none(
        elements in prop::collection::vec(prop::option::of(any::<i32>()), 0..20)
    ) {
        let first_absent = elements.iter().position(Option::is_none);
        let result = ImmutableSequence::try_from_options(elements.clone());
        match first_absent {
            Some(index) => prop_assert_eq!(result.unwrap_err().index(), index),
            None => prop_assert_eq!(result.unwrap().len(), elements.len()),
        }
    }

    // =========================================================================
    // Growth Properties
    // =========================================================================

    #[test]
    fn prop_plus_appends_and_preserves_receiver(sequence in small_sequence(), element: i32) {
        let before = sequence.to_vec();
        let extended = sequence.plus(element);

        prop_assert_eq!(extended.len(), sequence.len() + 1);
        prop_assert_eq!(&extended.as_slice()[..sequence.len()], sequence.as_slice());
        prop_assert_eq!(extended.last(), Some(&element));
        prop_assert_eq!(sequence.to_vec(), before);
    }

    #[test]
    fn prop_concat_is_ordered_union(left in small_sequence(), right in small_sequence()) {
        let joined = left.concat(&right);
        prop_assert_eq!(joined.len(), left.len() + right.len());

        let mut expected = left.to_vec();
        expected.extend(right.iter().copied());
        prop_assert_eq!(joined.to_vec(), expected);
    }

    #[test]
    fn prop_concat_matches_repeated_plus(left in small_sequence(), right in small_sequence()) {
        let folded = right.iter().fold(left.clone(), |accumulator, element| accumulator.plus(*element));
        prop_assert_eq!(left.concat(&right), folded);
    }

    // =========================================================================
    // Semigroup / Monoid Laws
    // =========================================================================

    #[test]
    fn prop_semigroup_associativity(a in small_sequence(), b in small_sequence(), c in small_sequence()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monoid_left_identity(sequence in small_sequence()) {
        prop_assert_eq!(ImmutableSequence::empty().combine(sequence.clone()), sequence);
    }

    #[test]
    fn prop_monoid_right_identity(sequence in small_sequence()) {
        prop_assert_eq!(sequence.clone().combine(ImmutableSequence::empty()), sequence);
    }

    #[test]
    fn prop_combine_ref_matches_combine(a in small_sequence(), b in small_sequence()) {
        prop_assert_eq!(a.combine_ref(&b), a.clone().combine(b));
    }

    // =========================================================================
    // Foldable Properties
    // =========================================================================

    #[test]
    fn prop_fold_left_matches_iterator_fold(sequence in small_sequence()) {
        let expected = sequence.iter().fold(0i64, |accumulator, element| accumulator + i64::from(*element));
        let actual = sequence.fold_left(0i64, |accumulator, element| accumulator + i64::from(element));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_fold_right_reverses_order(sequence in small_sequence()) {
        let mut expected = sequence.to_vec();
        expected.reverse();
        let collected = sequence.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        prop_assert_eq!(collected, expected);
    }
}
