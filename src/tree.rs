use crate::{Node, NodeIndex, NodeStore, NodeValue, Result, TokenFormat, TreeBuilder};

/// A binary tree in the standard left-child/right-child representation.
///
/// Only [`TreeBuilder`] creates these, so a `LeftRightTree` is always acyclic
/// and every node in its store is reachable from the root. Operations that can
/// break that shape consume the tree and return a different type:
/// [`LeftRightTree::link`] yields a [`crate::CyclicTree`], and
/// [`LeftRightTree::into_first_child_next_sibling`] a
/// [`crate::FirstChildNextSiblingTree`].
#[derive(Debug, Clone, Default)]
pub struct LeftRightTree {
    store: NodeStore<Node>,
    root: Option<NodeIndex>,
    // Token conventions the tree was built with, reused by `link`
    format: TokenFormat,
}

impl LeftRightTree {
    pub(crate) fn from_parts(
        store: NodeStore<Node>,
        root: Option<NodeIndex>,
        format: TokenFormat,
    ) -> Self {
        Self {
            store,
            root,
            format,
        }
    }

    pub(crate) fn into_parts(self) -> (NodeStore<Node>, Option<NodeIndex>) {
        (self.store, self.root)
    }

    /// An empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from level-order tokens using the default `"#"` sentinel.
    pub fn from_level_order<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        TreeBuilder::new().build(tokens)
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.store.get(index)
    }

    /// Token conventions used to build the tree and to parse link instructions
    pub fn format(&self) -> &TokenFormat {
        &self.format
    }

    pub fn store(&self) -> &NodeStore<Node> {
        &self.store
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of layers in the tree
    pub fn depth(&self) -> usize {
        self.level_order().len()
    }

    /// Return true if an inorder walk yields strictly increasing values
    pub fn is_bst(&self) -> bool {
        let mut previous: Option<NodeValue> = None;
        for value in self.inorder_iter() {
            if previous.is_some_and(|previous| previous >= value) {
                return false;
            }
            previous = Some(value);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::test::tree;
    use crate::LeftRightTree;

    #[test]
    fn accessors() {
        let t = tree(&["6", "3", "8", "1", "7", "#", "9"]);
        assert_eq!(t.len(), 6);
        assert_eq!(t.depth(), 3);

        let root = t.root().unwrap();
        let node = t.node(root).unwrap();
        assert_eq!(node.value(), 6);
        assert_eq!(t.node(node.left().unwrap()).unwrap().value(), 3);
        assert_eq!(t.node(node.right().unwrap()).unwrap().value(), 8);
    }

    #[test]
    fn empty() {
        let t = LeftRightTree::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.depth(), 0);
        assert!(t.is_bst());
    }

    #[test]
    fn bst() {
        assert!(!tree(&["6", "3", "8", "1", "7", "#", "9"]).is_bst());
        assert!(tree(&["6", "3", "8", "1", "5", "#", "9"]).is_bst());
        assert!(!tree(&["2", "2"]).is_bst());
    }
}
