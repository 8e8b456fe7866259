//! An owned AVL tree. Every mutating operation hands a subtree down the recursion by value
//! and takes back the (possibly rotated) subtree that should replace it, so no parent
//! pointers or `unsafe` are needed.
//!
//! # Examples
//!
//! ```
//! use avltree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1).insert(2).insert(3);
//! assert!(tree.contains(&1));
//!
//! // Inserting in ascending order still yields a balanced tree.
//! assert_eq!(tree.to_string(), "[1, 2, 3]");
//!
//! // Deleting something that isn't there does nothing.
//! tree.delete(&42);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::iter::InOrder;
use crate::node::{Link, Node};
use crate::util::Imbalance;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of values.
///
/// Values equal to one already in the tree are kept, not merged: duplicates are inserted to
/// the right of their equal and come out next to it during [`in_order`][Tree::in_order].
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `value` into the tree and rebalances it. Returns `self` so inserts can be
    /// chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(4).insert(3).insert(2).insert(1);
    ///
    /// assert_eq!(tree.to_string(), "[[1, 2, ], 3, 4]");
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        self.root = Some(insert(self.root.take(), value));
        self
    }

    /// Inserts every value, in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all(1..=7);
    ///
    /// assert_eq!(tree.to_string(), "[[1, 2, 3], 4, [5, 6, 7]]");
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn insert_all<I>(&mut self, values: I) -> &mut Self
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0usize;
        for value in values {
            self.insert(value);
            inserted += 1;
        }
        debug!("inserted {} values, height is now {}", inserted, self.height());
        self
    }

    /// Deletes one occurrence of `value` from the tree and rebalances it. If the tree does not
    /// contain `value`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all(1..=3);
    ///
    /// // The successor of 2 takes its place.
    /// tree.delete(&2);
    /// assert_eq!(tree.to_string(), "[1, 3, ]");
    ///
    /// tree.delete(&42);
    /// assert_eq!(tree.to_string(), "[1, 3, ]");
    /// ```
    pub fn delete(&mut self, value: &T) -> &mut Self
    where
        T: Ord,
    {
        self.root = delete(self.root.take(), value);
        self
    }

    /// Deletes every value, in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_all(1..=8).delete_all(&[1, 3]);
    ///
    /// assert_eq!(tree.to_string(), "[[2, 4, 5], 6, [, 7, 8]]");
    /// ```
    pub fn delete_all<'a, I>(&mut self, values: I) -> &mut Self
    where
        T: Ord + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut requested = 0usize;
        for value in values {
            self.delete(value);
            requested += 1;
        }
        debug!("deleted {} values, height is now {}", requested, self.height());
        self
    }

    /// Whether some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// The smallest value in the tree.
    pub fn smallest(&self) -> Option<&T> {
        self.root().map(|root| smallest(root).value())
    }

    /// Visits the values of the tree in sorted order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Gets the height of this tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        Node::height_of(self.root())
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many values are in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.insert_all(values);
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(values);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Renders the tree the same way as its root [`Node`]. An empty tree renders as nothing.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root),
            None => Ok(()),
        }
    }
}

/// The difference in height between the right and left subtrees of a possibly absent node.
/// An absent node is balanced.
pub fn balance_factor<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(0, Node::balance_factor)
}

/// Descends left from `node` until there is no left child.
pub fn smallest<T>(node: &Node<T>) -> &Node<T> {
    let mut node = node;
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

/// Inserts `value` into the subtree and returns the root of the rebalanced subtree.
fn insert<T>(link: Link<T>, value: T) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match link {
        Some(node) => node,
        None => return Node::new_boxed(value),
    };

    // The rebalancing below needs to know which side of the child the value ended up on.
    // The child's value can't change underneath us: if the child rotated, its height didn't
    // grow and this node stays balanced.
    if value < node.value {
        let into_left_left = node.left().map(|left| value < left.value);
        node.left = Some(insert(node.left.take(), value));
        node.update_height();

        if node.balance_factor() < -1 {
            return match into_left_left {
                Some(true) => rebalance(node, Imbalance::LeftLeft),
                _ => rebalance(node, Imbalance::LeftRight),
            };
        }
    } else {
        // Ties go right, so a value equal to the right child lands in its right subtree.
        let into_right_left = node.right().map(|right| value < right.value);
        node.right = Some(insert(node.right.take(), value));
        node.update_height();

        if node.balance_factor() > 1 {
            return match into_right_left {
                Some(true) => rebalance(node, Imbalance::RightLeft),
                _ => rebalance(node, Imbalance::RightRight),
            };
        }
    }

    node
}

/// Deletes one occurrence of `value` from the subtree and returns what is left of it,
/// rebalanced.
fn delete<T>(link: Link<T>, value: &T) -> Link<T>
where
    T: Ord,
{
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left, None) => return left,

            // With two children, promote this node's successor. That is, the smallest
            // node in this node's right subtree.
            (left, Some(right)) => {
                let (successor, new_right) = take_smallest(right);
                node.value = successor;
                node.left = left;
                node.right = new_right;
            }
        },
    }

    Some(balance(node))
}

/// Removes the smallest node of the subtree. Returns its value and the rest of the subtree,
/// rebalanced along the removed path.
fn take_smallest<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (smallest, new_left) = take_smallest(left);
            node.left = new_left;
            (smallest, Some(balance(node)))
        }
    }
}

/// Recomputes the height of `node` after one of its subtrees shrank and restores the AVL
/// invariant using the shape of the taller child.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();

    let node = match node.balance_factor() {
        n if n < -1 => match balance_factor(node.left()) {
            n if n <= 0 => rebalance(node, Imbalance::LeftLeft),
            _ => rebalance(node, Imbalance::LeftRight),
        },
        n if n > 1 => match balance_factor(node.right()) {
            n if n >= 0 => rebalance(node, Imbalance::RightRight),
            _ => rebalance(node, Imbalance::RightLeft),
        },
        _ => node,
    };

    if cfg!(debug_assertions) {
        let left_height = Node::height_of(node.left());
        let right_height = Node::height_of(node.right());
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.max(right_height) - left_height.min(right_height) <= 1);
    }

    node
}

/// Applies the rotations that fix the given imbalance at `node`.
fn rebalance<T>(mut node: Box<Node<T>>, imbalance: Imbalance) -> Box<Node<T>> {
    trace!("rebalancing {} case at height {}", imbalance, node.height);

    match imbalance {
        Imbalance::LeftLeft => rotate_right(node),
        Imbalance::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Imbalance::RightRight => rotate_left(node),
        Imbalance::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall. Without a left child
/// there is nothing to rotate and `old_root` is returned as is.
///
/// # Diagram
///
/// ```text
///   old_root                  new_root
///    /     \                  /     \
/// new_root  z     rotate ->  x    old_root
///  / \                               /  \
/// x   y                             y    z
/// ```
fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = match old_root.left.take() {
        Some(left) => left,
        None => return old_root,
    };

    old_root.left = new_root.right.take();
    old_root.update_height();

    new_root.right = Some(old_root);
    new_root.update_height();
    new_root
}

/// Rotate `old_root` to the left. The mirror image of [`rotate_right`].
///
/// # Diagram
///
/// ```text
///   old_root                     new_root
///    /     \                     /     \
///   x    new_root  rotate ->  old_root  z
///         /  \                 /  \
///        y    z               x    y
/// ```
fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = match old_root.right.take() {
        Some(right) => right,
        None => return old_root,
    };

    old_root.right = new_root.left.take();
    old_root.update_height();

    new_root.left = Some(old_root);
    new_root.update_height();
    new_root
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a sorted vector.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same values, in the same order, in both.
    fn do_ops<V>(ops: &[Op<V>], tree: &mut Tree<V>, model: &mut Vec<V>) -> bool
    where
        V: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    tree.insert(v.clone());
                    let pos = model.partition_point(|x| x <= v);
                    model.insert(pos, v.clone());
                }
                Op::Delete(v) => {
                    tree.delete(v);
                    if let Ok(pos) = model.binary_search(v) {
                        model.remove(pos);
                    }
                }
                Op::InOrder => {
                    if !tree.in_order().eq(model.iter()) {
                        return false;
                    }
                }
            }
            if !is_avl(tree.root()) {
                return false;
            }
        }
        true
    }

    /// Whether every cached height is right and every balance factor is in `-1..=1`.
    fn is_avl<T>(node: Option<&Node<T>>) -> bool {
        match node {
            None => true,
            Some(n) => {
                let expected = Node::height_of(n.left()).max(Node::height_of(n.right())) + 1;
                n.height == expected
                    && (-1..=1).contains(&balance_factor(node))
                    && is_avl(n.left())
                    && is_avl(n.right())
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model) && tree.in_order().eq(model.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            tree.insert_all(xs.iter().copied());

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn height_is_logarithmic(xs: Vec<u16>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            // An AVL tree with `n` nodes is at most ~1.44 lg(n + 2) tall.
            let bound = 1.45 * ((xs.len() + 2) as f64).log2();
            (tree.height() as f64) <= bound
        }
    }
}
