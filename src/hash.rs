use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::LeftRightTree;

impl LeftRightTree {
    /// Feed the tree shape into `state`: every node in preorder with its value
    /// and which of its child links are present. Equal trees feed identical
    /// input.
    fn hash_structure<H: Hasher>(&self, state: &mut H) {
        let mut stack: Vec<_> = self.root().into_iter().collect();

        while let Some(index) = stack.pop() {
            let node = &self.store()[index];
            node.value().hash(state);
            node.left().is_some().hash(state);
            node.right().is_some().hash(state);

            stack.extend(node.right());
            stack.extend(node.left());
        }

        self.len().hash(state);
    }

    /// 64-bit xxhash of the tree structure, consistent with [`PartialEq`].
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        self.hash_structure(&mut hasher);
        hasher.finish()
    }
}

impl Hash for LeftRightTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_structure(state)
    }
}
