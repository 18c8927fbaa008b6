//! Immutable, indexed, copy-on-grow sequence.
//!
//! This module provides [`ImmutableSequence`], a fixed-at-construction ordered
//! collection with O(1) indexed reads. Growing a sequence never touches the
//! receiver: [`ImmutableSequence::plus`] and [`ImmutableSequence::concat`]
//! allocate a fresh backing store and copy into it.
//!
//! # Overview
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `new`         | O(1)       |
//! | `get`         | O(1)       |
//! | `len`         | O(1)       |
//! | `indices`     | O(1)       |
//! | `plus`        | O(n)       |
//! | `concat`      | O(n + m)   |
//!
//! There is no structural sharing: a chain of N appends costs O(N²) in total.
//! Collect into a `Vec` first when building large sequences.
//!
//! # Examples
//!
//! ```rust
//! use oak::sequence;
//! use oak::sequence::ImmutableSequence;
//!
//! let original = sequence!["a", "b"];
//! let extended = original.plus("c");
//!
//! assert_eq!(original.len(), 2);   // Original unchanged
//! assert_eq!(extended.len(), 3);   // New sequence
//! assert_eq!(extended[2], "c");
//!
//! for index in extended.indices() {
//!     assert!(!extended[index].is_empty());
//! }
//!
//! // Absent elements are rejected with their position
//! let rejected = ImmutableSequence::try_from_options([Some(1), None]);
//! assert!(rejected.is_err());
//! ```
//!
//! Elements can never be written through a sequence:
//!
//! ```rust,compile_fail
//! use oak::sequence;
//!
//! let numbers = sequence![1, 2, 3];
//! numbers[0] = 10;
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::{Add, Index, Range};

use super::iterator::{ImmutableSequenceIntoIterator, ImmutableSequenceIterator};
use crate::error::SequenceError;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Monoid, Semigroup};

/// An immutable, indexed sequence of elements.
///
/// The backing store is a private, exclusively owned `Box<[T]>`; nothing
/// outside the sequence can observe or change it. The valid index range is
/// derived from the length on demand and never stored.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `get`         | O(1)       |
/// | `len`         | O(1)       |
/// | `plus`        | O(n)       |
/// | `concat`      | O(n + m)   |
///
/// # Examples
///
/// ```rust
/// use oak::sequence::ImmutableSequence;
///
/// let sequence = ImmutableSequence::from_slice(&[1, 2, 3]);
/// assert_eq!(sequence.get(1), &2);
/// assert_eq!(sequence.indices(), 0..3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImmutableSequence<T> {
    elements: Box<[T]>,
}

static_assertions::assert_impl_all!(ImmutableSequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(ImmutableSequence<String>: Send, Sync);
static_assertions::assert_not_impl_any!(ImmutableSequence<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(ImmutableSequence<i32>: std::ops::IndexMut<usize>);

impl<T> ImmutableSequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence::ImmutableSequence;
    ///
    /// let sequence: ImmutableSequence<i32> = ImmutableSequence::new();
    /// assert!(sequence.is_empty());
    /// assert!(sequence.indices().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Box::default(),
        }
    }

    /// Creates a sequence containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::singleton(42);
    /// assert_eq!(sequence.len(), 1);
    /// assert_eq!(sequence.first(), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: Box::new([element]),
        }
    }

    /// Builds a sequence from possibly-absent elements.
    ///
    /// Every element is checked eagerly. Construction is all-or-nothing: if
    /// any element is `None`, no sequence is produced.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::AbsentElement`] carrying the index of the
    /// first `None` in the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::error::SequenceError;
    /// use oak::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::try_from_options([Some('a'), Some('b')]).unwrap();
    /// assert_eq!(sequence.len(), 2);
    ///
    /// let rejected = ImmutableSequence::try_from_options([Some('a'), None, Some('b')]);
    /// assert_eq!(rejected, Err(SequenceError::AbsentElement { index: 1 }));
    /// ```
    pub fn try_from_options<I>(elements: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let iterator = elements.into_iter();
        let mut collected = Vec::with_capacity(iterator.size_hint().0);

        for (index, element) in iterator.enumerate() {
            match element {
                Some(element) => collected.push(element),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(index, "rejected absent element");
                    return Err(SequenceError::AbsentElement { index });
                }
            }
        }

        Ok(Self::from(collected))
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of valid indices, `0..len`.
    ///
    /// The range is empty for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let letters = sequence!['x', 'y', 'z'];
    /// let collected: Vec<char> = letters.indices().map(|index| letters[index]).collect();
    /// assert_eq!(collected, vec!['x', 'y', 'z']);
    /// ```
    #[inline]
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not within [`indices`](Self::indices). An
    /// out-of-range index is a bug in the calling code; use
    /// [`get_checked`](Self::get_checked) when the index is untrusted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let numbers = sequence![10, 20, 30];
    /// assert_eq!(numbers.get(0), &10);
    /// assert_eq!(numbers.get(2), &30);
    /// ```
    ///
    /// ```rust,should_panic
    /// use oak::sequence;
    ///
    /// let numbers = sequence![10, 20, 30];
    /// numbers.get(3);
    /// ```
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        match self.elements.get(index) {
            Some(element) => element,
            None => panic!(
                "{}",
                SequenceError::IndexOutOfRange {
                    index,
                    length: self.len(),
                }
            ),
        }
    }

    /// Returns a reference to the element at `index`, or an error when the
    /// index is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::error::SequenceError;
    /// use oak::sequence;
    ///
    /// let numbers = sequence![1, 2];
    /// assert_eq!(numbers.get_checked(1), Ok(&2));
    /// assert_eq!(
    ///     numbers.get_checked(2),
    ///     Err(SequenceError::IndexOutOfRange { index: 2, length: 2 })
    /// );
    /// ```
    #[inline]
    pub fn get_checked(&self, index: usize) -> Result<&T, SequenceError> {
        self.elements
            .get(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                length: self.len(),
            })
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a read-only slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over references to the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let numbers = sequence![1, 2, 3];
    /// assert_eq!(numbers.iter().sum::<i32>(), 6);
    /// assert_eq!(numbers.iter().rev().next(), Some(&3));
    /// ```
    #[inline]
    pub fn iter(&self) -> ImmutableSequenceIterator<'_, T> {
        ImmutableSequenceIterator::new(&self.elements)
    }

    /// Returns `true` if the sequence contains an element equal to `element`.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    /// Returns the index of the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let numbers = sequence![1, 4, 9, 16];
    /// assert_eq!(numbers.find_index(|number| *number > 5), Some(2));
    /// assert_eq!(numbers.find_index(|number| *number > 100), None);
    /// ```
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().position(predicate)
    }

    /// Creates a new sequence by applying `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let numbers = sequence![1, 2, 3];
    /// let labels = numbers.map(|number| format!("#{number}"));
    /// assert_eq!(labels.as_slice(), &["#1", "#2", "#3"]);
    /// ```
    pub fn map<B, F>(&self, function: F) -> ImmutableSequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.elements.iter().map(function).collect()
    }
}

impl<T: Clone> ImmutableSequence<T> {
    /// Creates a sequence holding a private copy of `slice`.
    ///
    /// Later changes to the caller's buffer do not affect the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence::ImmutableSequence;
    ///
    /// let mut buffer = vec![1, 2, 3];
    /// let sequence = ImmutableSequence::from_slice(&buffer);
    /// buffer[0] = 100;
    /// assert_eq!(sequence.get(0), &1);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            elements: Box::from(slice),
        }
    }

    /// Returns a new sequence with `element` appended.
    ///
    /// The receiver is left untouched; the whole backing store is copied.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let original = sequence![1, 2];
    /// let extended = original.plus(3);
    /// assert_eq!(original.as_slice(), &[1, 2]);
    /// assert_eq!(extended.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn plus(&self, element: T) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element);

        #[cfg(feature = "tracing")]
        tracing::trace!(length = elements.len(), "appended element");

        Self::from(elements)
    }

    /// Returns a new sequence with a possibly-absent `element` appended.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::AbsentElement`] with the index the element
    /// would have occupied (the current length) if `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::error::SequenceError;
    /// use oak::sequence;
    ///
    /// let numbers = sequence![1, 2];
    /// assert_eq!(numbers.try_plus(Some(3)).map(|sequence| sequence.len()), Ok(3));
    /// assert_eq!(numbers.try_plus(None), Err(SequenceError::AbsentElement { index: 2 }));
    /// ```
    pub fn try_plus(&self, element: Option<T>) -> Result<Self, SequenceError> {
        match element {
            Some(element) => Ok(self.plus(element)),
            None => {
                let index = self.len();
                #[cfg(feature = "tracing")]
                tracing::debug!(index, "rejected absent element");
                Err(SequenceError::AbsentElement { index })
            }
        }
    }

    /// Returns a new sequence holding this sequence's elements followed by
    /// `other`'s.
    ///
    /// Neither operand is modified. Concatenating two empty sequences yields
    /// a fresh empty sequence.
    ///
    /// # Complexity
    ///
    /// O(n + m) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    ///
    /// let left = sequence!['a', 'b'];
    /// let right = sequence!['c', 'd'];
    /// let joined = left.concat(&right);
    /// assert_eq!(joined.as_slice(), &['a', 'b', 'c', 'd']);
    /// assert_eq!(left.len(), 2);
    /// assert_eq!(right.len(), 2);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);

        #[cfg(feature = "tracing")]
        tracing::trace!(length = elements.len(), "concatenated sequences");

        Self::from(elements)
    }

    /// Copies the elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ImmutableSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ImmutableSequence<T> {
    /// Takes ownership of `elements`; the caller keeps no alias to them.
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ImmutableSequence<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Box::new(elements),
        }
    }
}

impl<T: Clone> From<&[T]> for ImmutableSequence<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T> From<ImmutableSequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: ImmutableSequence<T>) -> Self {
        sequence.elements.into_vec()
    }
}

impl<T> FromIterator<T> for ImmutableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from(elements)
    }
}

impl<T> IntoIterator for ImmutableSequence<T> {
    type Item = T;
    type IntoIter = ImmutableSequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ImmutableSequenceIntoIterator::new(self.elements)
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSequence<T> {
    type Item = &'a T;
    type IntoIter = ImmutableSequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for ImmutableSequence<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> AsRef<[T]> for ImmutableSequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> Borrow<[T]> for ImmutableSequence<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        &self.elements
    }
}

/// Concatenates two owned sequences, reusing the left operand's elements.
impl<T> Add for ImmutableSequence<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut elements = self.elements.into_vec();
        elements.extend(other.elements.into_vec());
        Self::from(elements)
    }
}

impl<T: Clone> Add<&ImmutableSequence<T>> for &ImmutableSequence<T> {
    type Output = ImmutableSequence<T>;

    #[inline]
    fn add(self, other: &ImmutableSequence<T>) -> Self::Output {
        self.concat(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T: Clone> Semigroup for ImmutableSequence<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn combine_ref(&self, other: &Self) -> Self {
        self.concat(other)
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Monoid for ImmutableSequence<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(feature = "typeclass")]
impl<T> Foldable for ImmutableSequence<T> {
    type Item = T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ImmutableSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ImmutableSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ImmutableSequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ImmutableSequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ImmutableSequence::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmutableSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
