//! # oak
//!
//! An immutable, indexed sequence whose growth operations return fresh
//! copies instead of mutating the receiver.
//!
//! ## Overview
//!
//! - **[`ImmutableSequence`](sequence::ImmutableSequence)**: fixed ordered
//!   collection with O(1) indexed reads, O(n) `plus` and O(n + m) `concat`
//! - **Absence-checked construction**: `try_from_options` rejects `None`
//!   elements eagerly and reports the offending index
//! - **[`Tree`](tree::Tree)** and **[`Treepath`](tree::Treepath)**: immutable
//!   trees whose children are sequences, and paths into them
//! - **Type Classes**: `Semigroup`, `Monoid` and `Foldable` for sequences
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits and their sequence instances
//! - `serde`: `Serialize` / `Deserialize` for sequences
//! - `rayon`: Parallel iteration and collection
//! - `tracing`: Debug events for rejected elements, trace events for growth
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use oak::prelude::*;
//!
//! let base = sequence![1, 2];
//! let grown = base.plus(3).concat(&sequence![4, 5]);
//!
//! assert_eq!(base.len(), 2);
//! assert_eq!(grown.as_slice(), &[1, 2, 3, 4, 5]);
//! assert_eq!(grown.indices(), 0..5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and the `sequence!` macro.
///
/// # Usage
///
/// ```rust
/// use oak::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::sequence;
    pub use crate::sequence::*;
    pub use crate::tree::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

mod macros;

pub mod error;
pub mod sequence;
pub mod tree;

#[cfg(feature = "typeclass")]
pub mod typeclass;
