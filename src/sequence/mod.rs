//! Immutable sequences.
//!
//! - [`ImmutableSequence`]: fixed-at-construction ordered collection with
//!   O(1) indexed reads and copy-on-grow `plus` / `concat`
//!
//! # Copy-on-grow
//!
//! Unlike a persistent structure, a sequence never shares its backing store.
//! Every growth operation allocates a store sized for the result and copies
//! both inputs into it:
//!
//! ```text
//! s1:              [a, b]
//! s2 = s1.plus(c): [a, b, c]   // fresh store, s1 untouched
//! ```
//!
//! # Examples
//!
//! ```rust
//! use oak::sequence::ImmutableSequence;
//!
//! let s1 = ImmutableSequence::from(["a", "b"]);
//! let s2 = s1.plus("c");
//! let s3 = s1.concat(&s2);
//!
//! assert_eq!(s1.len(), 2);
//! assert_eq!(s2.len(), 3);
//! assert_eq!(s3.as_slice(), &["a", "b", "a", "b", "c"]);
//! ```

mod immutable;
mod iterator;
#[cfg(feature = "rayon")]
mod parallel;

pub use immutable::ImmutableSequence;
pub use iterator::ImmutableSequenceIntoIterator;
pub use iterator::ImmutableSequenceIterator;
