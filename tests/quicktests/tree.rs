use avltree::tree::{balance_factor, Tree};
use avltree::Node;

/// Whether every node below `node` caches the right height and has a balance factor
/// in `-1..=1`.
fn balanced<T>(node: Option<&Node<T>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            let expected = Node::height_of(n.left()).max(Node::height_of(n.right())) + 1;
            n.height() == expected
                && (-1..=1).contains(&balance_factor(node))
                && balanced(n.left())
                && balanced(n.right())
        }
    }
}

quickcheck::quickcheck! {
    fn inserts_stay_balanced(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        xs.into_iter().all(|x| {
            tree.insert(x);
            balanced(tree.root())
        })
    }
}

quickcheck::quickcheck! {
    fn deletes_stay_balanced(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        deletes.iter().all(|x| {
            tree.delete(x);
            balanced(tree.root())
        })
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let mut sorted = xs;
        sorted.sort_unstable();
        tree.in_order().eq(sorted.iter())
    }
}

quickcheck::quickcheck! {
    fn insert_then_delete_round_trips(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|v| *v != x).collect();
        let before: Vec<_> = tree.in_order().copied().collect();

        tree.insert(x).delete(&x);
        tree.in_order().copied().eq(before)
    }
}

quickcheck::quickcheck! {
    fn deleting_missing_value_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|v| *v != x).collect();
        let before = tree.to_string();

        tree.delete(&x);
        tree.to_string() == before
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.delete_all(&deletes);

        // Each delete removes a single occurrence.
        let mut still_present = xs;
        for delete in &deletes {
            if let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }
        still_present.sort_unstable();

        tree.len() == still_present.len() && tree.in_order().eq(still_present.iter())
    }
}
