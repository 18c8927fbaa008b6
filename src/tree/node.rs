use std::fmt;
use std::ops::{Index, Range};

use crate::error::SequenceError;
use crate::sequence::ImmutableSequence;

/// Minimal behavior of an immutable tree whose nodes all share one type.
///
/// Implementors expose their children as an [`ImmutableSequence`] of
/// `Self`; indexed access, the valid index range and leaf detection are
/// derived from it. `adopt` is the only way to "change" a node: it returns
/// a copy of the node holding the given children.
///
/// # Examples
///
/// ```rust
/// use oak::sequence;
/// use oak::tree::{AnyTree, Tree};
///
/// let tree = Tree::new(1, sequence![Tree::leaf(2), Tree::leaf(3)]);
///
/// let total: i32 = tree.indices().map(|index| *tree.get(index).payload()).sum();
/// assert_eq!(total, 5);
/// ```
pub trait AnyTree: Sized {
    /// Returns the children of this node.
    fn children(&self) -> &ImmutableSequence<Self>;

    /// Returns a copy of this node holding `children` instead of its own.
    #[must_use]
    fn adopt(&self, children: ImmutableSequence<Self>) -> Self;

    /// Returns the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside [`AnyTree::indices`].
    #[track_caller]
    fn get(&self, index: usize) -> &Self {
        self.children().get(index)
    }

    /// Returns the child at `index`, or an error when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index` is not below
    /// the number of children.
    fn get_checked(&self, index: usize) -> Result<&Self, SequenceError> {
        self.children().get_checked(index)
    }

    /// Returns the valid child indices.
    fn indices(&self) -> Range<usize> {
        self.children().indices()
    }

    /// Returns the number of children.
    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Returns `true` if this node has no children.
    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// An immutable tree node carrying a payload.
///
/// Children are held in an [`ImmutableSequence`], so a node is fixed once
/// built. Growing a node (`plus_child`) or replacing its children (`adopt`)
/// returns a new node.
///
/// # Examples
///
/// ```rust
/// use oak::sequence;
/// use oak::tree::{AnyTree, Tree};
///
/// let trunk = Tree::leaf("trunk");
/// let grown = trunk.plus_child(Tree::leaf("branch"));
///
/// assert!(trunk.is_leaf());
/// assert_eq!(grown.child_count(), 1);
/// assert_eq!(grown[0].payload(), &"branch");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<T> {
    payload: T,
    children: ImmutableSequence<Self>,
}

impl<T> Tree<T> {
    /// Creates a node with the given payload and children.
    #[inline]
    #[must_use]
    pub const fn new(payload: T, children: ImmutableSequence<Self>) -> Self {
        Self { payload, children }
    }

    /// Creates a node without children.
    #[inline]
    #[must_use]
    pub fn leaf(payload: T) -> Self {
        Self::new(payload, ImmutableSequence::new())
    }

    /// Returns the payload of this node.
    #[inline]
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns the number of nodes in this tree, this node included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    /// use oak::tree::Tree;
    ///
    /// let tree = Tree::new('a', sequence![Tree::new('b', sequence![Tree::leaf('c')])]);
    /// assert_eq!(tree.size(), 3);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }

    /// Returns the number of edges on the longest path down to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns a tree of the same shape with `function` applied to every
    /// payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    /// use oak::tree::Tree;
    ///
    /// let tree = Tree::new(1, sequence![Tree::leaf(2)]);
    /// let doubled = tree.map(&|payload: &i32| payload * 2);
    /// assert_eq!(doubled, Tree::new(2, sequence![Tree::leaf(4)]));
    /// ```
    pub fn map<B, F>(&self, function: &F) -> Tree<B>
    where
        F: Fn(&T) -> B,
    {
        Tree::new(
            function(&self.payload),
            self.children.map(|child| child.map(function)),
        )
    }

    /// Returns the payloads in depth-first pre-order.
    #[must_use]
    pub fn pre_order(&self) -> Vec<&T> {
        let mut payloads = Vec::with_capacity(self.children.len() + 1);
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            payloads.push(&node.payload);
            pending.extend(node.children.iter().rev());
        }
        payloads
    }
}

impl<T: Clone> Tree<T> {
    /// Returns a copy of this node with `child` appended to its children.
    #[must_use]
    pub fn plus_child(&self, child: Self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(children = self.children.len() + 1, "appended child");
        Self::new(self.payload.clone(), self.children.plus(child))
    }

    /// Returns a copy of this node carrying `payload` instead of its own.
    #[must_use]
    pub fn with_payload(&self, payload: T) -> Self {
        Self::new(payload, self.children.clone())
    }
}

impl<T: Clone> AnyTree for Tree<T> {
    #[inline]
    fn children(&self) -> &ImmutableSequence<Self> {
        &self.children
    }

    fn adopt(&self, children: ImmutableSequence<Self>) -> Self {
        Self::new(self.payload.clone(), children)
    }
}

impl<T> Index<usize> for Tree<T> {
    type Output = Self;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.children.get(index)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            formatter.debug_tuple("Leaf").field(&self.payload).finish()
        } else {
            formatter
                .debug_struct("Tree")
                .field("payload", &self.payload)
                .field("children", &self.children)
                .finish()
        }
    }
}
