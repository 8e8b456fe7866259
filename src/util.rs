use std::fmt;

/// The shape of an out-of-balance subtree, named after the path from the unbalanced node
/// down into its taller grandchild. See
/// <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Imbalance {
    /// Left child is too tall and leans left (or not at all). One right rotation.
    LeftLeft,
    /// Left child is too tall and leans right. Rotate the child left, then the node right.
    LeftRight,
    /// Right child is too tall and leans right (or not at all). One left rotation.
    RightRight,
    /// Right child is too tall and leans left. Rotate the child right, then the node left.
    RightLeft,
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeftLeft => "left-left",
            Self::LeftRight => "left-right",
            Self::RightRight => "right-right",
            Self::RightLeft => "right-left",
        })
    }
}
