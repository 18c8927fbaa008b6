//! Iterators over [`ImmutableSequence`](super::ImmutableSequence).

use std::iter::FusedIterator;

/// An iterator over references to the elements of an
/// [`ImmutableSequence`](super::ImmutableSequence).
///
/// Created by [`ImmutableSequence::iter`](super::ImmutableSequence::iter).
#[derive(Debug)]
pub struct ImmutableSequenceIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> ImmutableSequenceIterator<'a, T> {
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<T> Clone for ImmutableSequenceIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for ImmutableSequenceIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, count: usize) -> Option<Self::Item> {
        self.inner.nth(count)
    }
}

impl<T> DoubleEndedIterator for ImmutableSequenceIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableSequenceIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ImmutableSequenceIterator<'_, T> {}

/// An owning iterator over the elements of an
/// [`ImmutableSequence`](super::ImmutableSequence).
///
/// Consumes the sequence without cloning its elements.
#[derive(Debug)]
pub struct ImmutableSequenceIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> ImmutableSequenceIntoIterator<T> {
    pub(super) fn new(elements: Box<[T]>) -> Self {
        Self {
            inner: elements.into_vec().into_iter(),
        }
    }
}

impl<T> Iterator for ImmutableSequenceIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ImmutableSequenceIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableSequenceIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ImmutableSequenceIntoIterator<T> {}
