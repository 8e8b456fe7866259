//! The vertex type shared by [`Tree`][crate::tree::Tree] and its traversal.
//!
//! A [`Node`] exclusively owns its two (optional) children, so a whole subtree is
//! released when its root is dropped. There are no parent pointers: the balancing
//! code in [`tree`][crate::tree] hands ownership of a subtree down into each
//! recursive call and receives ownership of the (possibly rotated) replacement.

use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single vertex of an AVL tree.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree, if any. Every value in it sorts before [`Node::value`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The height of a possibly absent subtree. An absent subtree has height 0.
    pub fn height_of(node: Option<&Self>) -> usize {
        node.map_or(0, |n| n.height)
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        let right_height = Self::height_of(self.right());
        let left_height = Self::height_of(self.left());
        right_height as isize - left_height as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn update_height(&mut self) {
        let left_height = Self::height_of(self.left());
        let right_height = Self::height_of(self.right());
        self.height = left_height.max(right_height) + 1;
    }

    /// Whether this node has no children.
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Renders the subtree as `V` for a leaf and `[L, V, R]` otherwise, where an absent
/// child renders as nothing. For example, a root `2` with only a left child `1` is
/// `[1, 2, ]`.
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.value);
        }

        f.write_str("[")?;
        if let Some(left) = self.left() {
            write!(f, "{}", left)?;
        }
        write!(f, ", {}, ", self.value)?;
        if let Some(right) = self.right() {
            write!(f, "{}", right)?;
        }
        f.write_str("]")
    }
}
