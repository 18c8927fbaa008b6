//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```

use super::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use oak::sequence;
/// use oak::sequence::ImmutableSequence;
/// use oak::typeclass::{Monoid, Semigroup};
///
/// let numbers = sequence![1, 2];
/// assert_eq!(ImmutableSequence::empty().combine(numbers.clone()), numbers);
/// assert_eq!(numbers.clone().combine(ImmutableSequence::empty()), numbers);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    /// use oak::sequence::ImmutableSequence;
    /// use oak::typeclass::Monoid;
    ///
    /// let joined = ImmutableSequence::combine_all([sequence!['a'], sequence![], sequence!['b']]);
    /// assert_eq!(joined, sequence!['a', 'b']);
    ///
    /// let nothing = ImmutableSequence::<char>::combine_all([]);
    /// assert!(nothing.is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
