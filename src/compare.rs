use std::collections::VecDeque;

use tracing::debug;

use crate::{LeftRightTree, Node};

// Tree Comparison

impl LeftRightTree {
    /// Return true if both trees have the same shape and the same value at
    /// every position.
    ///
    /// Walks both trees breadth-first in lockstep and stops at the first pair
    /// of nodes whose values or child links differ.
    pub fn is_same_tree(&self, other: &Self) -> bool {
        let (self_root, other_root) = match (self.root(), other.root()) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        let mut queue = VecDeque::from([(self_root, other_root)]);

        while let Some((a, b)) = queue.pop_front() {
            let (a, b) = (&self.store()[a], &other.store()[b]);

            if !same_shape(a, b) {
                debug!("Trees differ at {} / {}", a.value(), b.value());
                return false;
            }

            // Child presence matches, so zipping keeps positions paired
            queue.extend(a.children().zip(b.children()));
        }

        true
    }
}

fn same_shape(a: &Node, b: &Node) -> bool {
    a.value() == b.value()
        && a.left().is_some() == b.left().is_some()
        && a.right().is_some() == b.right().is_some()
}

impl PartialEq for LeftRightTree {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_tree(other)
    }
}

impl Eq for LeftRightTree {}

#[cfg(test)]
mod tests {
    use crate::test::{tree, TRAVERSAL_TREES};

    #[test]
    fn reflexive_and_symmetric() {
        for tokens in TRAVERSAL_TREES {
            let a = tree(tokens);
            let b = tree(tokens);
            assert!(a.is_same_tree(&a));
            assert_eq!(a, b);
            assert_eq!(b, a);
        }
    }

    #[test]
    fn sentinel_versus_value() {
        let a = tree(&["1", "2", "3", "#", "#", "4", "#", "5", "6"]);
        let b = tree(&["1", "2", "3", "#", "#", "#", "4", "5", "6"]);
        assert_ne!(a, b);
        assert_ne!(b, a);

        // Same values in every position but 4 is a left child in one, right in the other
        assert_eq!(a.preorder(), b.preorder());
    }

    #[test]
    fn one_position_differs() {
        assert_ne!(tree(&["1", "2", "3"]), tree(&["1", "#", "3"]));
        assert_ne!(tree(&["1", "#", "3"]), tree(&["1", "2", "3"]));
        assert_ne!(tree(&["1", "2", "3", "4"]), tree(&["1", "2", "3", "#"]));
    }

    #[test]
    fn value_mismatch() {
        assert_ne!(tree(&["1", "2", "3"]), tree(&["1", "2", "4"]));
        assert_ne!(tree(&["1", "2"]), tree(&["1", "#", "2"]));
    }

    #[test]
    fn empty() {
        assert_eq!(tree(&[]), tree(&[]));
        assert_ne!(tree(&[]), tree(&["1"]));
        assert_ne!(tree(&["1"]), tree(&[]));
    }
}
