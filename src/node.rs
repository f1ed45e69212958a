use crate::{NodeIndex, NodeValue};

/// A binary tree node stored in a [`crate::NodeStore`].
///
/// Children are referenced by their index in the owning store. In a
/// [`crate::LeftRightTree`] every node has exactly one inbound link, apart from
/// the root. A [`crate::CyclicTree`] may break that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    value: NodeValue,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

impl Node {
    pub fn new(value: NodeValue) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> NodeValue {
        self.value
    }

    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Return true if the node has neither a left nor a right child
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Children in left, right order
    pub fn children(&self) -> impl Iterator<Item = NodeIndex> {
        self.left.into_iter().chain(self.right)
    }

    /// Return the number of child links of this node
    pub fn num_children(&self) -> usize {
        self.children().count()
    }

    pub(crate) fn set_left(&mut self, left: Option<NodeIndex>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<NodeIndex>) {
        self.right = right;
    }
}
