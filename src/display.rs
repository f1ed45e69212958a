use std::fmt::Write;

use crate::{LeftRightTree, NodeIndex, NodeValue};

/// Render values as `[1,2,3]`
pub fn format_values(values: &[NodeValue]) -> String {
    let values: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(","))
}

/// Render layers as `[[1],[3,2]]`
pub fn format_layers(layers: &[Vec<NodeValue>]) -> String {
    let inner: Vec<String> = layers.iter().map(|layer| format_values(layer)).collect();
    format!("[{}]", inner.join(","))
}

impl std::fmt::Display for LeftRightTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(root) = self.root() else {
            return f.write_str("━\n");
        };

        let column_width = 2;

        // Preorder with depth and the side the node hangs off its parent
        let mut stack: Vec<(usize, Option<char>, NodeIndex)> = vec![(0, None, root)];

        while let Some((depth, side, index)) = stack.pop() {
            let node = &self.store()[index];

            // A sibling is waiting on the stack at the same depth
            let has_siblings = stack.last().is_some_and(|next| next.0 == depth);
            let has_children = !node.is_leaf();

            if depth == 0 {
                f.write_char(if has_children { '┏' } else { '━' })?;
            } else {
                for i in 0..depth * column_width {
                    f.write_char(if i % column_width == 0 { '┃' } else { ' ' })?;
                }
                f.write_char(if has_children || has_siblings { '┣' } else { '┗' })?;
            }

            if let Some(side) = side {
                write!(f, "{}:", side)?;
            }
            writeln!(f, "{}", node.value())?;

            if let Some(right) = node.right() {
                stack.push((depth + 1, Some('r'), right));
            }
            if let Some(left) = node.left() {
                stack.push((depth + 1, Some('l'), left));
            }
        }

        Ok(())
    }
}
