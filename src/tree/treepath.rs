use crate::error::SequenceError;
use crate::sequence::ImmutableSequence;

use super::AnyTree;

/// A path from a root node down to one of its descendants.
///
/// The path records the child index taken at every step together with the
/// node reached, so the node at the end, its parent path and the index it
/// occupies in its parent are all available without walking the tree again.
/// A path borrows the tree it was built on; extending it with
/// [`Treepath::child`] returns a new path and leaves the receiver unchanged.
///
/// # Examples
///
/// ```rust
/// use oak::sequence;
/// use oak::tree::{Tree, Treepath};
///
/// let root = Tree::new(0, sequence![Tree::leaf(1), Tree::new(2, sequence![Tree::leaf(3)])]);
///
/// let start = Treepath::new(&root);
/// let end = start.child(1).child(0);
///
/// assert!(start.is_root());
/// assert_eq!(end.depth(), 2);
/// assert_eq!(end.tree_at_end().payload(), &3);
/// assert_eq!(end.index_in_previous(), Some(0));
/// assert_eq!(end.previous().map(|path| *path.tree_at_end().payload()), Some(2));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Treepath<'a, N> {
    /// Nodes from the root to the end; always one longer than `steps`.
    nodes: ImmutableSequence<&'a N>,
    steps: ImmutableSequence<usize>,
}

impl<'a, N: AnyTree> Treepath<'a, N> {
    /// Creates the empty path that starts and ends at `root`.
    #[must_use]
    pub fn new(root: &'a N) -> Self {
        Self {
            nodes: ImmutableSequence::singleton(root),
            steps: ImmutableSequence::new(),
        }
    }

    /// Follows `steps` from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] for the first step that
    /// names a child which does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::error::SequenceError;
    /// use oak::sequence;
    /// use oak::tree::{Tree, Treepath};
    ///
    /// let root = Tree::new("r", sequence![Tree::new("a", sequence![Tree::leaf("b")])]);
    ///
    /// let path = Treepath::follow(&root, &[0, 0]).unwrap();
    /// assert_eq!(path.tree_at_end().payload(), &"b");
    ///
    /// assert_eq!(
    ///     Treepath::follow(&root, &[0, 1]),
    ///     Err(SequenceError::IndexOutOfRange { index: 1, length: 1 })
    /// );
    /// ```
    pub fn follow(root: &'a N, steps: &[usize]) -> Result<Self, SequenceError> {
        steps
            .iter()
            .try_fold(Self::new(root), |path, &index| path.try_child(index))
    }

    /// Returns the path extended to the child at `index` of the end node.
    ///
    /// # Panics
    ///
    /// Panics if the end node has no child at `index`.
    #[must_use]
    #[track_caller]
    pub fn child(&self, index: usize) -> Self {
        let next = self.tree_at_end().get(index);
        self.extended(index, next)
    }

    /// Returns the path extended to the child at `index` of the end node,
    /// or an error when that child does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index` is not below
    /// the child count of the end node.
    pub fn try_child(&self, index: usize) -> Result<Self, SequenceError> {
        match self.tree_at_end().get_checked(index) {
            Ok(next) => Ok(self.extended(index, next)),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, depth = self.depth(), "no child at index");
                Err(error)
            }
        }
    }

    fn extended(&self, index: usize, next: &'a N) -> Self {
        Self {
            nodes: self.nodes.plus(next),
            steps: self.steps.plus(index),
        }
    }

    /// Returns the root the path starts from.
    #[must_use]
    pub fn root(&self) -> &'a N {
        *self.nodes.get(0)
    }

    /// Returns the node the path ends at.
    #[must_use]
    pub fn tree_at_end(&self) -> &'a N {
        *self.nodes.get(self.steps.len())
    }

    /// Returns the child indices taken from the root.
    #[must_use]
    pub fn steps(&self) -> &[usize] {
        self.steps.as_slice()
    }

    /// Returns the number of steps taken from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the path ends at its root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the index of the end node among its parent's children, or
    /// `None` at the root.
    #[must_use]
    pub fn index_in_previous(&self) -> Option<usize> {
        self.steps.last().copied()
    }

    /// Returns the path to the parent of the end node, or `None` at the root.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        let depth = self.depth();
        if depth == 0 {
            return None;
        }
        Some(Self {
            nodes: ImmutableSequence::from_slice(&self.nodes.as_slice()[..depth]),
            steps: ImmutableSequence::from_slice(&self.steps.as_slice()[..depth - 1]),
        })
    }

    /// Returns the nodes on the path, from the root to the end.
    pub fn trees(&self) -> impl DoubleEndedIterator<Item = &'a N> {
        self.nodes.iter().copied()
    }

    /// Returns a new root in which the end node is replaced by
    /// `replacement`.
    ///
    /// Every ancestor of the end node is rebuilt with
    /// [`AnyTree::adopt`]; the tree the path was built on is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use oak::sequence;
    /// use oak::tree::{Tree, Treepath};
    ///
    /// let root = Tree::new(0, sequence![Tree::leaf(1), Tree::leaf(2)]);
    /// let rebuilt = Treepath::new(&root).child(1).replace_end(Tree::leaf(20));
    ///
    /// assert_eq!(rebuilt, Tree::new(0, sequence![Tree::leaf(1), Tree::leaf(20)]));
    /// assert_eq!(root[1].payload(), &2);
    /// ```
    #[must_use]
    pub fn replace_end(&self, replacement: N) -> N
    where
        N: Clone,
    {
        let mut current = replacement;
        for depth in (0..self.depth()).rev() {
            let parent = self.nodes.get(depth);
            let mut siblings = parent.children().to_vec();
            siblings[*self.steps.get(depth)] = current;
            current = parent.adopt(ImmutableSequence::from(siblings));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.depth(), "rebuilt tree along path");
        current
    }
}

impl<N> Clone for Treepath<'_, N> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            steps: self.steps.clone(),
        }
    }
}
