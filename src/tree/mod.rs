//! Immutable trees whose children are [`ImmutableSequence`]s.
//!
//! - [`AnyTree`]: indexed access to the children of a tree node, plus
//!   `adopt` to build a copy of the node with different children
//! - [`Tree`]: a payload-carrying tree node implementing [`AnyTree`]
//! - [`Treepath`]: a path of child indices from a root to one of its
//!   descendants
//!
//! # Rebuilding along a path
//!
//! Trees are never modified. Replacing a descendant rebuilds every node on
//! the path from the root, and shares nothing with the original:
//!
//! ```text
//! root                 root'
//! ├── a                ├── a
//! │   └── b    ==>     │   └── b'
//! └── c                └── c
//! ```
//!
//! # Examples
//!
//! ```rust
//! use oak::sequence;
//! use oak::tree::{AnyTree, Tree, Treepath};
//!
//! let root = Tree::new("root", sequence![
//!     Tree::new("a", sequence![Tree::leaf("b")]),
//!     Tree::leaf("c"),
//! ]);
//!
//! let path = Treepath::new(&root).child(0).child(0);
//! assert_eq!(path.tree_at_end().payload(), &"b");
//! assert_eq!(path.steps(), &[0, 0]);
//!
//! let rebuilt = path.replace_end(Tree::leaf("b'"));
//! assert_eq!(rebuilt[0][0].payload(), &"b'");
//! assert_eq!(root[0][0].payload(), &"b");
//! assert_eq!(rebuilt.indices(), 0..2);
//! ```
//!
//! [`ImmutableSequence`]: crate::sequence::ImmutableSequence

mod node;
mod treepath;

pub use node::AnyTree;
pub use node::Tree;
pub use treepath::Treepath;
