use std::ops::{Index, IndexMut};

use crate::NodeIndex;

/// Arena owning every node of a tree.
///
/// Nodes are only ever appended, so a [`NodeIndex`] handed out by
/// [`NodeStore::push`] stays valid for the lifetime of the store. Dropping the
/// store drops the backing vector directly, which is safe whatever the links
/// between the nodes look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStore<N> {
    nodes: Vec<N>,
}

impl<N> Default for NodeStore<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N> NodeStore<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the store, returning its index
    pub fn push(&mut self, node: N) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    pub fn get(&self, index: NodeIndex) -> Option<&N> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all stored nodes in allocation order, ignoring links
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &N)> {
        self.nodes.iter().enumerate()
    }

    /// Re-type every node of the store in place, keeping indices stable.
    pub(crate) fn map<M, F>(self, f: F) -> NodeStore<M>
    where
        F: FnMut(N) -> M,
    {
        NodeStore {
            nodes: self.nodes.into_iter().map(f).collect(),
        }
    }
}

impl<N> Index<NodeIndex> for NodeStore<N> {
    type Output = N;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<N> IndexMut<NodeIndex> for NodeStore<N> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}
