//! Unit tests for ImmutableSequence.
//!
//! These tests cover construction, indexed access, growth and the
//! immutability guarantees of the sequence.

use oak::error::SequenceError;
use oak::sequence;
use oak::sequence::ImmutableSequence;
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_construction_from_present_elements() {
    let sequence = ImmutableSequence::try_from_options([Some("A"), Some("B")]).unwrap();
    assert_eq!(sequence.len(), 2);
}

#[rstest]
#[case(vec![None, Some(1), Some(2)], 0)]
#[case(vec![Some(1), None, Some(2)], 1)]
#[case(vec![Some(1), Some(2), None], 2)]
#[case(vec![Some(1), None, None], 1)]
fn test_construction_rejects_absent_element(
    #[case] elements: Vec<Option<i32>>,
    #[case] expected_index: usize,
) {
    let result = ImmutableSequence::try_from_options(elements);
    assert_eq!(
        result,
        Err(SequenceError::AbsentElement {
            index: expected_index
        })
    );
}

#[rstest]
fn test_construction_error_message_names_index() {
    let error = ImmutableSequence::try_from_options([Some('a'), None, Some('b')]).unwrap_err();
    assert_eq!(error.to_string(), "absent element at index 1");
}

#[rstest]
fn test_construction_scans_eagerly() {
    let mut visited = 0;
    let elements = (0..5).map(|index| {
        visited += 1;
        if index == 3 { None } else { Some(index) }
    });
    let result = ImmutableSequence::try_from_options(elements);
    assert!(result.is_err());
    assert_eq!(visited, 4);
}

#[rstest]
fn test_from_slice_takes_private_copy() {
    let mut buffer = vec![String::from("a"), String::from("b")];
    let sequence = ImmutableSequence::from_slice(&buffer);
    buffer[0].push('!');
    buffer.push(String::from("c"));
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence.get(0), "a");
}

#[rstest]
fn test_collect_from_iterator() {
    let sequence: ImmutableSequence<i32> = (1..=4).collect();
    assert_eq!(sequence.as_slice(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_empty_sequence_is_reusable() {
    let empty: ImmutableSequence<i32> = ImmutableSequence::default();
    let first = empty.plus(1);
    let second = empty.plus(2);
    assert!(empty.is_empty());
    assert_eq!(first.as_slice(), &[1]);
    assert_eq!(second.as_slice(), &[2]);
}

// =============================================================================
// Indexed Access
// =============================================================================

#[rstest]
fn test_get_returns_elements_in_input_order() {
    let input = ["x", "y", "z"];
    let sequence = ImmutableSequence::from(input);
    for index in sequence.indices() {
        assert_eq!(sequence.get(index), &input[index]);
        assert_eq!(&sequence[index], &input[index]);
    }
}

#[rstest]
#[case(ImmutableSequence::new(), 0..0)]
#[case(sequence![7], 0..1)]
#[case(sequence![7, 8, 9], 0..3)]
fn test_indices_range(
    #[case] sequence: ImmutableSequence<i32>,
    #[case] expected: std::ops::Range<usize>,
) {
    assert_eq!(sequence.indices(), expected);
    assert_eq!(sequence.indices().len(), sequence.len());
}

#[rstest]
#[should_panic(expected = "out of range")]
fn test_get_at_len_panics() {
    let sequence = sequence![1, 2, 3];
    let _ = sequence.get(sequence.len());
}

#[rstest]
#[should_panic(expected = "index 0 out of range for sequence of length 0")]
fn test_get_on_empty_sequence_panics() {
    let sequence: ImmutableSequence<&str> = sequence![];
    let _ = sequence[0];
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(usize::MAX)]
fn test_get_checked_on_empty_sequence(#[case] index: usize) {
    let sequence: ImmutableSequence<u8> = ImmutableSequence::new();
    assert_eq!(
        sequence.get_checked(index),
        Err(SequenceError::IndexOutOfRange { index, length: 0 })
    );
}

#[rstest]
fn test_first_and_last() {
    let sequence = sequence![1, 2, 3];
    assert_eq!(sequence.first(), Some(&1));
    assert_eq!(sequence.last(), Some(&3));

    let empty: ImmutableSequence<i32> = sequence![];
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[rstest]
fn test_reads_are_idempotent() {
    let sequence = sequence![3, 1, 4];
    let length = sequence.len();
    let indices = sequence.indices();
    let element = *sequence.get(2);
    for _ in 0..3 {
        assert_eq!(sequence.len(), length);
        assert_eq!(sequence.indices(), indices);
        assert_eq!(*sequence.get(2), element);
    }
}

// =============================================================================
// Append
// =============================================================================

#[rstest]
fn test_plus_preserves_prefix_and_adds_suffix() {
    let original = sequence!["A", "B"];
    let extended = original.plus("C");

    assert_eq!(extended.len(), 3);
    assert_eq!(extended.get(0), &"A");
    assert_eq!(extended.get(1), &"B");
    assert_eq!(extended.get(2), &"C");

    assert_eq!(original.len(), 2);
    assert_eq!(original.as_slice(), &["A", "B"]);
}

#[rstest]
fn test_plus_on_empty() {
    let empty: ImmutableSequence<i32> = sequence![];
    assert_eq!(empty.plus(9).as_slice(), &[9]);
}

#[rstest]
fn test_try_plus_rejects_absent_element() {
    let sequence = sequence![1, 2, 3];
    assert_eq!(
        sequence.try_plus(None),
        Err(SequenceError::AbsentElement { index: 3 })
    );
    assert_eq!(sequence.len(), 3);
}

#[rstest]
fn test_try_plus_accepts_present_element() {
    let sequence = sequence![1];
    assert_eq!(sequence.try_plus(Some(2)), Ok(sequence![1, 2]));
}

// =============================================================================
// Concatenation
// =============================================================================

#[rstest]
#[case(sequence!["A", "B"], sequence!["C", "D"], sequence!["A", "B", "C", "D"])]
#[case(sequence![], sequence![], sequence![])]
#[case(sequence!["A"], sequence![], sequence!["A"])]
#[case(sequence![], sequence!["A"], sequence!["A"])]
fn test_concat_length_and_order(
    #[case] left: ImmutableSequence<&str>,
    #[case] right: ImmutableSequence<&str>,
    #[case] expected: ImmutableSequence<&str>,
) {
    let joined = left.concat(&right);
    assert_eq!(joined.len(), left.len() + right.len());
    assert_eq!(joined, expected);
}

#[rstest]
fn test_concat_leaves_operands_untouched() {
    let left = sequence![1, 2];
    let right = sequence![3, 4];
    let _joined = &left + &right;
    assert_eq!(left.as_slice(), &[1, 2]);
    assert_eq!(right.as_slice(), &[3, 4]);
}

#[rstest]
fn test_concat_with_itself() {
    let sequence = sequence![1, 2];
    assert_eq!(sequence.concat(&sequence).as_slice(), &[1, 2, 1, 2]);
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn test_growth_produces_distinct_instances() {
    let s1 = sequence![1, 2];
    let s2 = s1.plus(3);
    let s3 = s1.concat(&sequence![]);

    assert_ne!(s1.as_slice().as_ptr(), s2.as_slice().as_ptr());
    assert_ne!(s1.as_slice().as_ptr(), s3.as_slice().as_ptr());
    assert_eq!(s1, s3);
    assert_eq!(s1.len(), 2);
    assert_eq!(s1.get(0), &1);
    assert_eq!(s1.get(1), &2);
}

#[rstest]
fn test_clone_is_equal_and_independent() {
    let original = sequence![String::from("a")];
    let cloned = original.clone();
    let grown = cloned.plus(String::from("b"));
    assert_eq!(original, cloned);
    assert_eq!(original.len(), 1);
    assert_eq!(grown.len(), 2);
}

#[rstest]
fn test_into_vec_returns_owned_elements() {
    let sequence = sequence![1, 2, 3];
    let elements: Vec<i32> = sequence.into();
    assert_eq!(elements, vec![1, 2, 3]);
}

// =============================================================================
// Derived Traits
// =============================================================================

#[rstest]
fn test_equal_sequences_hash_equally() {
    let mut set = HashSet::new();
    set.insert(sequence![1, 2]);
    assert!(set.contains(&sequence![1].plus(2)));
    assert!(set.contains(&[1, 2][..]));
}

#[rstest]
fn test_ordering_is_lexicographic() {
    assert!(sequence![1, 2] < sequence![1, 3]);
    assert!(sequence![1] < sequence![1, 0]);
    assert!(ImmutableSequence::<i32>::new() < sequence![0]);
}

#[rstest]
fn test_contains_and_find_index() {
    let sequence = sequence!["oak", "elm", "ash"];
    assert!(sequence.contains(&"elm"));
    assert!(!sequence.contains(&"yew"));
    assert_eq!(sequence.find_index(|name| name.starts_with('a')), Some(2));
}

#[rstest]
fn test_map_builds_new_sequence() {
    let sequence = sequence![1, 2, 3];
    let squares = sequence.map(|number| number * number);
    assert_eq!(squares, sequence![1, 4, 9]);
    assert_eq!(sequence, sequence![1, 2, 3]);
}

#[rstest]
fn test_display_and_debug() {
    let sequence = sequence![1, 2];
    assert_eq!(sequence.to_string(), "[1, 2]");
    assert_eq!(format!("{sequence:?}"), "[1, 2]");
}
