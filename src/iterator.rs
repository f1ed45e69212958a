//! Iterative traversals of a [`LeftRightTree`].
//!
//! None of the traversals recurse. Depth-first orders keep an explicit stack
//! of node indices, level orders a queue, so traversal depth is bounded only
//! by memory.

use std::collections::VecDeque;

use crate::{LeftRightTree, Node, NodeIndex, NodeStore, NodeValue};

/// Preorder iterator: root, left subtree, right subtree.
pub struct Preorder<'iter> {
    store: &'iter NodeStore<Node>,
    current: Option<NodeIndex>,
    // Right subtrees deferred while descending left
    stack: Vec<NodeIndex>,
}

impl<'iter> Iterator for Preorder<'iter> {
    type Item = NodeValue;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current.take().or_else(|| self.stack.pop())?;
        let node = &self.store[index];

        match (node.left(), node.right()) {
            (Some(left), Some(right)) => {
                self.stack.push(right);
                self.current = Some(left);
            }
            (left, right) => self.current = left.or(right),
        }

        Some(node.value())
    }
}

/// Inorder iterator: left subtree, root, right subtree.
pub struct Inorder<'iter> {
    store: &'iter NodeStore<Node>,
    current: Option<NodeIndex>,
    // Ancestors whose left subtree is still being walked
    stack: Vec<NodeIndex>,
}

impl<'iter> Iterator for Inorder<'iter> {
    type Item = NodeValue;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.store[index].left();
        }

        let index = self.stack.pop()?;
        let node = &self.store[index];
        self.current = node.right();

        Some(node.value())
    }
}

/// Postorder iterator: left subtree, right subtree, root.
pub struct Postorder<'iter> {
    store: &'iter NodeStore<Node>,
    // Each entry records whether its children were already pushed
    stack: Vec<(NodeIndex, bool)>,
}

impl<'iter> Iterator for Postorder<'iter> {
    type Item = NodeValue;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, expanded) = self.stack.pop()?;
            let node = &self.store[index];

            if expanded {
                return Some(node.value());
            }

            self.stack.push((index, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }
}

impl LeftRightTree {
    pub fn preorder_iter(&self) -> Preorder<'_> {
        Preorder {
            store: self.store(),
            current: self.root(),
            stack: Vec::new(),
        }
    }

    pub fn inorder_iter(&self) -> Inorder<'_> {
        Inorder {
            store: self.store(),
            current: self.root(),
            stack: Vec::new(),
        }
    }

    pub fn postorder_iter(&self) -> Postorder<'_> {
        Postorder {
            store: self.store(),
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    pub fn preorder(&self) -> Vec<NodeValue> {
        self.preorder_iter().collect()
    }

    pub fn inorder(&self) -> Vec<NodeValue> {
        self.inorder_iter().collect()
    }

    pub fn postorder(&self) -> Vec<NodeValue> {
        self.postorder_iter().collect()
    }

    /// Calls the provided closure with the node indices of each layer, top
    /// down. Within a layer nodes are discovered left to right.
    pub(crate) fn for_each_layer<F>(&self, mut f: F)
    where
        F: FnMut(&[NodeIndex]),
    {
        let mut layer: Vec<NodeIndex> = self.root().into_iter().collect();

        while !layer.is_empty() {
            f(&layer);
            layer = layer
                .iter()
                .flat_map(|&index| self.store()[index].children())
                .collect();
        }
    }

    /// Values layer by layer, each layer left to right.
    pub fn level_order(&self) -> Vec<Vec<NodeValue>> {
        let mut layers = Vec::new();
        self.for_each_layer(|layer| {
            layers.push(layer.iter().map(|&i| self.store()[i].value()).collect())
        });
        layers
    }

    /// Values layer by layer, alternating direction: the root layer left to
    /// right, the next one right to left, and so on.
    ///
    /// ```
    /// use hornbeam::LeftRightTree;
    ///
    /// let tree = LeftRightTree::from_level_order(&["1", "2", "3", "4", "#", "#", "5"]).unwrap();
    /// assert_eq!(tree.zigzag_level_order(), vec![vec![1], vec![3, 2], vec![4, 5]]);
    /// ```
    pub fn zigzag_level_order(&self) -> Vec<Vec<NodeValue>> {
        let mut layers = Vec::new();
        let mut queue: VecDeque<NodeIndex> = self.root().into_iter().collect();
        let mut left_to_right = true;

        while !queue.is_empty() {
            let nodes_cur_layer = queue.len();
            let mut values = VecDeque::with_capacity(nodes_cur_layer);

            for _ in 0..nodes_cur_layer {
                let Some(index) = queue.pop_front() else {
                    break;
                };
                let node = &self.store()[index];

                // Discovery stays left to right, only emission alternates
                if left_to_right {
                    values.push_back(node.value());
                } else {
                    values.push_front(node.value());
                }
                queue.extend(node.children());
            }

            layers.push(Vec::from(values));
            left_to_right = !left_to_right;
        }

        layers
    }
}
