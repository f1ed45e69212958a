use std::collections::VecDeque;

use tracing::{debug, debug_span};

use crate::{LeftRightTree, NodeIndex, NodeValue};

/// A node waiting in the breadth-first frontier together with the path that
/// led to it. Dropped as soon as its children are queued.
struct Frontier {
    index: NodeIndex,
    path: Vec<NodeValue>,
    sum: i64,
}

impl LeftRightTree {
    /// Find every root-to-leaf path whose values add up to `target`.
    ///
    /// Paths are returned in the order their leaves are reached by a
    /// breadth-first walk, which is layer order and left to right within a
    /// layer. Sums are accumulated as `i64`.
    ///
    /// ```
    /// use hornbeam::LeftRightTree;
    ///
    /// let tree = LeftRightTree::from_level_order(&["-2", "#", "-3"]).unwrap();
    /// assert_eq!(tree.path_sum(-5), vec![vec![-2, -3]]);
    /// ```
    pub fn path_sum(&self, target: i64) -> Vec<Vec<NodeValue>> {
        let _span = debug_span!("path_sum", sum = target).entered();

        let mut paths = Vec::new();
        let Some(root) = self.root() else {
            return paths;
        };

        let root_node = &self.store()[root];
        if root_node.is_leaf() {
            if i64::from(root_node.value()) == target {
                paths.push(vec![root_node.value()]);
            }
            return paths;
        }

        let mut queue = VecDeque::from([Frontier {
            index: root,
            path: vec![root_node.value()],
            sum: i64::from(root_node.value()),
        }]);

        while let Some(Frontier { index, path, sum }) = queue.pop_front() {
            let node = &self.store()[index];

            if node.is_leaf() {
                if sum == target {
                    debug!("Found path {:?}", path);
                    paths.push(path);
                }
                continue;
            }

            for child in node.children() {
                let value = self.store()[child].value();
                let mut child_path = Vec::with_capacity(path.len() + 1);
                child_path.extend_from_slice(&path);
                child_path.push(value);

                queue.push_back(Frontier {
                    index: child,
                    path: child_path,
                    sum: sum + i64::from(value),
                });
            }
        }

        paths
    }
}
