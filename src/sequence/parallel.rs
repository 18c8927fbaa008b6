//! Rayon integration for [`ImmutableSequence`].
//!
//! Sequences are never mutated after construction, so a borrowed sequence can
//! be read from any number of worker threads at once.
//!
//! # Examples
//!
//! ```rust
//! use oak::sequence::ImmutableSequence;
//! use rayon::prelude::*;
//!
//! let numbers: ImmutableSequence<u64> = (1..=1000).collect();
//! let sum: u64 = numbers.par_iter().sum();
//! assert_eq!(sum, 500_500);
//!
//! let doubled: ImmutableSequence<u64> = numbers.par_iter().map(|number| number * 2).collect();
//! assert_eq!(doubled.get(999), &2000);
//! ```

use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelIterator};

use super::ImmutableSequence;

impl<'a, T: Sync + 'a> IntoParallelIterator for &'a ImmutableSequence<T> {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.as_slice().into_par_iter()
    }
}

impl<T: Send> IntoParallelIterator for ImmutableSequence<T> {
    type Item = T;
    type Iter = rayon::vec::IntoIter<T>;

    fn into_par_iter(self) -> Self::Iter {
        Vec::from(self).into_par_iter()
    }
}

impl<T: Send> FromParallelIterator<T> for ImmutableSequence<T> {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        let elements: Vec<T> = par_iter.into_par_iter().collect();
        Self::from(elements)
    }
}
