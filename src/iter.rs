//! In-order traversal of a [`Tree`][crate::tree::Tree].

use crate::node::Node;

/// An iterator over the values of a tree in sorted order: each node's left subtree, then
/// the node itself, then its right subtree.
///
/// Created by [`Tree::in_order`][crate::tree::Tree::in_order]. It holds at most one pending
/// node per level, so it uses `O(height)` extra space.
#[derive(Clone, Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being (or has been) visited but which haven't been
    /// yielded yet. The top of the stack is the next value to yield.
    pending: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            pending: Vec::with_capacity(Node::height_of(root)),
        };
        iter.push_left_spine(root);
        iter
    }

    /// Queue `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
