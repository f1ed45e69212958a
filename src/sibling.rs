//! The first-child/next-sibling ("down-right") representation.
//!
//! Every node keeps a link to its first child and a link to its next sibling
//! on the same layer. After conversion from a [`LeftRightTree`] only the
//! leftmost node of each layer has a first child, which is the leftmost node
//! of the layer below:
//!
//! ```text
//!        1                1
//!       / \               |
//!      2   3      =>      2 - 3
//!         / \             |
//!        4   5            4 - 5
//! ```

use std::collections::VecDeque;

use tracing::{debug, debug_span};

use crate::{LeftRightTree, Node, NodeIndex, NodeStore, NodeValue};

/// A node of a [`FirstChildNextSiblingTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingNode {
    value: NodeValue,
    first_child: Option<NodeIndex>,
    next_sibling: Option<NodeIndex>,
}

impl SiblingNode {
    pub fn value(&self) -> NodeValue {
        self.value
    }

    pub fn first_child(&self) -> Option<NodeIndex> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeIndex> {
        self.next_sibling
    }
}

impl From<Node> for SiblingNode {
    /// Reads the left link as the first child and the right link as the next
    /// sibling.
    fn from(node: Node) -> Self {
        Self {
            value: node.value(),
            first_child: node.left(),
            next_sibling: node.right(),
        }
    }
}

/// A tree in the first-child/next-sibling representation, produced by
/// [`LeftRightTree::into_first_child_next_sibling`].
#[derive(Debug, Clone, Default)]
pub struct FirstChildNextSiblingTree {
    store: NodeStore<SiblingNode>,
    root: Option<NodeIndex>,
}

impl FirstChildNextSiblingTree {
    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&SiblingNode> {
        self.store.get(index)
    }

    pub fn first_child(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.store.get(index).and_then(SiblingNode::first_child)
    }

    pub fn next_sibling(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.store.get(index).and_then(SiblingNode::next_sibling)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Values of each layer, following the sibling chain from the head of
    /// every layer and the first-child link down to the next head.
    pub fn layers(&self) -> Vec<Vec<NodeValue>> {
        let mut layers = Vec::new();
        let mut head = self.root;

        while let Some(index) = head {
            let mut layer = Vec::new();
            let mut current = Some(index);
            while let Some(sibling) = current {
                layer.push(self.store[sibling].value);
                current = self.store[sibling].next_sibling;
            }
            layers.push(layer);
            head = self.store[index].first_child;
        }

        layers
    }
}

impl LeftRightTree {
    /// Convert into the first-child/next-sibling representation.
    ///
    /// Links are rewritten in place inside the same arena, one layer at a
    /// time: the nodes of a layer are chained through their right links, the
    /// head of each layer gets the head of the next layer as its left link, and
    /// the left links of all other nodes are cleared. The conversion consumes
    /// the tree since the original child links cannot be recovered.
    pub fn into_first_child_next_sibling(self) -> FirstChildNextSiblingTree {
        let _span = debug_span!("into_first_child_next_sibling").entered();

        let (mut store, root) = self.into_parts();
        let mut queue: VecDeque<NodeIndex> = root.into_iter().collect();

        while let Some(&head) = queue.front() {
            let nodes_cur_layer = queue.len();
            let mut tail = head;

            for _ in 0..nodes_cur_layer {
                let Some(index) = queue.pop_front() else {
                    break;
                };

                // Children are queued before this node's links are rewritten
                queue.extend(store[index].children());

                if index != head {
                    store[tail].set_right(Some(index));
                    store[index].set_left(None);
                    tail = index;
                }
            }

            store[tail].set_right(None);
            store[head].set_left(queue.front().copied());
            debug!(
                "Layer headed by {} has {} nodes",
                store[head].value(),
                nodes_cur_layer
            );
        }

        FirstChildNextSiblingTree {
            store: store.map(SiblingNode::from),
            root,
        }
    }
}

impl std::fmt::Display for FirstChildNextSiblingTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (depth, layer) in self.layers().iter().enumerate() {
            if depth > 0 {
                f.write_str("|\n")?;
            }
            let layer: Vec<String> = layer.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", layer.join(" - "))?;
        }
        Ok(())
    }
}
