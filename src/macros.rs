//! The `sequence!` construction macro.

/// Creates an [`ImmutableSequence`](crate::sequence::ImmutableSequence)
/// from a list of elements, in the manner of `vec!`.
///
/// # Syntax
///
/// ```text
/// sequence![]              // empty sequence
/// sequence![a, b, c]       // elements in order
/// sequence![element; n]    // n clones of element
/// ```
///
/// # Examples
///
/// ```
/// use oak::sequence;
/// use oak::sequence::ImmutableSequence;
///
/// let empty: ImmutableSequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let letters = sequence!['a', 'b', 'c'];
/// assert_eq!(letters.get(1), &'b');
///
/// let zeros = sequence![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! sequence {
    // No elements: the empty sequence
    () => {
        $crate::sequence::ImmutableSequence::new()
    };

    // Repeated element
    ($element:expr; $count:expr) => {
        $crate::sequence::ImmutableSequence::from(::std::vec![$element; $count])
    };

    // Listed elements, moved into the sequence's private store
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::ImmutableSequence::from([$($element),+])
    };
}
