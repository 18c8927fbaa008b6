//! Foldable type class - folding over data structures.
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative operations, both folds produce the same result:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! # Examples
//!
//! ```rust
//! use oak::sequence;
//! use oak::typeclass::Foldable;
//!
//! let numbers = sequence![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::Monoid;

/// A type class for data structures that can be folded to a summary value.
pub trait Foldable {
    /// The element type visited by the fold.
    type Item;

    /// Folds the elements from left to right.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
        Self: Sized;

    /// Folds the elements from right to left.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Item, B) -> B,
        Self: Sized;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Maps every element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    /// use oak::typeclass::Foldable;
    ///
    /// let words = sequence!["oak", "leaf"];
    /// let joined: String = words.fold_map(|word| word.to_uppercase());
    /// assert_eq!(joined, "OAKLEAF");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Item) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }
}

impl<T> Foldable for Vec<T> {
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
