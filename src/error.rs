//! Error types for sequence construction and checked access.
//!
//! Both kinds of error are local and deterministic: they describe a caller
//! bug, never a transient condition, so there is nothing to retry.

/// Represents errors raised by [`ImmutableSequence`](crate::sequence::ImmutableSequence).
///
/// # Examples
///
/// ```rust
/// use oak::error::SequenceError;
/// use oak::sequence::ImmutableSequence;
///
/// let result = ImmutableSequence::try_from_options([Some("a"), None, Some("b")]);
/// assert_eq!(result, Err(SequenceError::AbsentElement { index: 1 }));
/// assert_eq!(
///     format!("{}", SequenceError::AbsentElement { index: 1 }),
///     "absent element at index 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// An element supplied for construction was absent (`None`).
    AbsentElement {
        /// Position of the first absent element in the input.
        index: usize,
    },
    /// An index lay outside `0..length`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the sequence that was indexed.
        length: usize,
    },
}

impl SequenceError {
    /// Returns the index the error refers to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::error::SequenceError;
    ///
    /// let error = SequenceError::IndexOutOfRange { index: 5, length: 2 };
    /// assert_eq!(error.index(), 5);
    /// ```
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::AbsentElement { index } | Self::IndexOutOfRange { index, .. } => *index,
        }
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbsentElement { index } => {
                write!(formatter, "absent element at index {index}")
            }
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index {index} out of range for sequence of length {length}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}
