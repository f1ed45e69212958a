//! Building trees from level-order token sequences.
//!
//! A level-order sequence lists node values layer by layer, left to right,
//! with a sentinel token (`"#"` by default) in place of a missing child. The
//! children of a missing node are not listed at all, so `{1,#,2,3}` is the
//! tree with root `1`, no left child, right child `2`, and `3` as the left
//! child of `2`.

use std::collections::VecDeque;

use colored::Colorize as _;
use tracing::{debug, debug_span, warn};

use crate::{LeftRightTree, Node, NodeStore, NodeValue, ParseError, Result};

/// Token conventions shared by the tree builder and link instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFormat {
    /// Token marking an absent node
    pub sentinel: String,
    /// Separator between parent and child in a link instruction
    pub link_separator: String,
}

impl Default for TokenFormat {
    fn default() -> Self {
        Self {
            sentinel: "#".into(),
            link_separator: "->".into(),
        }
    }
}

impl TokenFormat {
    pub fn is_sentinel(&self, token: &str) -> bool {
        token.trim() == self.sentinel
    }

    /// Parse a node value token. `position` is only used for error reporting.
    pub fn parse_value(&self, token: &str, position: usize) -> Result<NodeValue, ParseError> {
        token
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidValue {
                token: token.to_string(),
                position,
            })
    }
}

/// A builder for constructing [`LeftRightTree`]s from level-order tokens.
///
/// # Examples
///
/// ```
/// use hornbeam::TreeBuilder;
///
/// let tree = TreeBuilder::new()
///     .sentinel("null")
///     .build(&["1", "null", "2", "3"])
///     .unwrap();
///
/// assert_eq!(tree.inorder(), vec![1, 3, 2]);
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    format: TokenFormat,
    debug_span: tracing::Span,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a new `TreeBuilder` using the default [`TokenFormat`].
    pub fn new() -> Self {
        Self::with_format(TokenFormat::default())
    }

    pub fn with_format(format: TokenFormat) -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder with {:?}", format));

        Self { format, debug_span }
    }

    /// Use a different token to mark absent nodes
    pub fn sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.format.sentinel = sentinel.into();
        self
    }

    /// Build the tree described by `tokens`.
    ///
    /// The tokens are consumed one layer at a time. Every non-sentinel token of
    /// the current layer takes the next pending parent from the queue, and that
    /// parent's left and right children are read from the next two unconsumed
    /// slots of the following layer. Slots past the end of the input are absent
    /// children.
    ///
    /// An empty input, or a sentinel in the root position, produces an empty
    /// tree. Any value token that does not parse as an integer fails the build.
    pub fn build<S: AsRef<str>>(&self, tokens: &[S]) -> Result<LeftRightTree> {
        self.debug_span.in_scope(|| -> Result<LeftRightTree> {
            let token = |position: usize| tokens[position].as_ref();
            let empty = || LeftRightTree::from_parts(NodeStore::new(), None, self.format.clone());

            let Some(first) = tokens.first() else {
                debug!("Empty input, empty tree");
                return Ok(empty());
            };

            if self.format.is_sentinel(first.as_ref()) {
                debug!("Sentinel at root position, empty tree");
                return Ok(empty());
            }

            let mut store = NodeStore::with_capacity(tokens.len());
            let root = store.push(Node::new(self.format.parse_value(token(0), 0)?));

            // Nodes of the current layer still waiting for their children
            let mut pending = VecDeque::from([root]);

            let mut layer_start = 0;
            let mut nodes_cur_layer = 1;
            let mut layers = 0;

            while layer_start < tokens.len() && nodes_cur_layer > 0 {
                // In-bounds slots of the next layer, sentinels included
                let mut nodes_next_layer = 0;

                for i in 0..nodes_cur_layer {
                    let position = layer_start + i;
                    if position >= tokens.len() || self.format.is_sentinel(token(position)) {
                        continue;
                    }

                    let Some(parent) = pending.pop_front() else {
                        break;
                    };

                    for side in [Side::Left, Side::Right] {
                        let child_position = layer_start + nodes_cur_layer + nodes_next_layer;
                        if child_position >= tokens.len() {
                            break;
                        }
                        nodes_next_layer += 1;

                        if self.format.is_sentinel(token(child_position)) {
                            continue;
                        }

                        let value = self
                            .format
                            .parse_value(token(child_position), child_position)?;
                        let child = store.push(Node::new(value));
                        debug!(
                            "{} {} child {} of {}",
                            "Allocated".green(),
                            side,
                            value,
                            store[parent].value()
                        );

                        match side {
                            Side::Left => store[parent].set_left(Some(child)),
                            Side::Right => store[parent].set_right(Some(child)),
                        }
                        pending.push_back(child);
                    }
                }

                layer_start += nodes_cur_layer;
                nodes_cur_layer = nodes_next_layer;
                layers += 1;
            }

            if layer_start < tokens.len() {
                warn!(
                    "Ignoring {} trailing tokens not reachable from any parent",
                    tokens.len() - layer_start
                );
            }

            debug!("Built tree with {} nodes in {} layers", store.len(), layers);

            Ok(LeftRightTree::from_parts(store, Some(root), self.format.clone()))
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
