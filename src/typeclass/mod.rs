//! Type class traits implemented by the sequence.
//!
//! - [`Semigroup`]: Associative binary operations (concatenation)
//! - [`Monoid`]: Semigroup with identity element (the empty sequence)
//! - [`Foldable`]: Folding over structures to produce summary values

mod foldable;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
