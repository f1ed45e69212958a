//! Cycle injection and detection.
//!
//! [`LeftRightTree::link`] attaches existing nodes as extra children of other
//! existing nodes, which can turn the tree into a graph with shared subtrees or
//! cycles. The result is a [`CyclicTree`], which only offers queries that are
//! safe on such a graph.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use colored::Colorize as _;
use tracing::{debug, debug_span, warn};

use crate::{
    LeftRightTree, Node, NodeIndex, NodeStore, NodeValue, ParseError, Result, StructureError,
    TokenFormat,
};

/// An instruction to attach the node holding `child` under the node holding
/// `parent`, written `"<parent>-><child>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkInstruction {
    pub parent: NodeValue,
    pub child: NodeValue,
}

impl LinkInstruction {
    pub fn new(parent: NodeValue, child: NodeValue) -> Self {
        Self { parent, child }
    }

    /// Parse an instruction using the separator of `format`. `position` is the
    /// index of the instruction, used for error reporting.
    pub fn parse_with(
        instruction: &str,
        format: &TokenFormat,
        position: usize,
    ) -> Result<Self, ParseError> {
        let (parent, child) = instruction
            .split_once(format.link_separator.as_str())
            .ok_or_else(|| ParseError::MalformedLink(instruction.to_string()))?;

        Ok(Self {
            parent: format.parse_value(parent, position)?,
            child: format.parse_value(child, position)?,
        })
    }
}

impl FromStr for LinkInstruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &TokenFormat::default(), 0)
    }
}

impl std::fmt::Display for LinkInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.parent, self.child)
    }
}

/// Outcome of applying a batch of link instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Number of instructions that added a link
    pub applied: usize,
    /// Instructions that were skipped, with the reason
    pub errors: Vec<(LinkInstruction, StructureError)>,
}

impl LinkReport {
    /// Return true if every instruction was applied
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A binary tree whose child links may point at nodes that are already
/// reachable elsewhere, forming shared subtrees or cycles.
#[derive(Debug, Clone)]
pub struct CyclicTree {
    store: NodeStore<Node>,
    root: Option<NodeIndex>,
}

impl CyclicTree {
    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.store.get(index)
    }

    pub fn store(&self) -> &NodeStore<Node> {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return true if some node can be reached from the root along two
    /// different paths.
    ///
    /// This holds for every cycle, but also for shared subtrees that do not
    /// loop back (a node with two parents). Use
    /// [`CyclicTree::has_ancestor_cycle`] to only detect links back to an
    /// ancestor.
    pub fn has_cycle(&self) -> bool {
        revisits(&self.store, self.root)
    }

    /// Return true if some node links back to one of its own ancestors.
    pub fn has_ancestor_cycle(&self) -> bool {
        back_edge(&self.store, self.root)
    }
}

impl LeftRightTree {
    /// Parse `instructions` and apply them with [`LeftRightTree::link_all`].
    ///
    /// Instructions are split on the link separator of the [`TokenFormat`] the
    /// tree was built with. Every instruction is parsed before the tree is
    /// touched, so a malformed instruction fails the whole call.
    ///
    /// ```
    /// use hornbeam::LeftRightTree;
    ///
    /// let tree = LeftRightTree::from_level_order(&["1", "2", "3", "4", "#", "5", "#"]).unwrap();
    /// assert!(!tree.has_cycle());
    ///
    /// let (graph, report) = tree.link(&["3->2"]).unwrap();
    /// assert!(report.is_clean());
    /// assert!(graph.has_cycle());
    /// ```
    pub fn link<S: AsRef<str>>(self, instructions: &[S]) -> Result<(CyclicTree, LinkReport)> {
        let format = self.format();
        let instructions = instructions
            .iter()
            .enumerate()
            .map(|(position, s)| LinkInstruction::parse_with(s.as_ref(), format, position))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.link_all(&instructions))
    }

    /// Attach existing nodes as children of other existing nodes.
    ///
    /// Nodes are resolved by value through an index built from one
    /// breadth-first walk before any link is added. When several nodes share a
    /// value the last one in breadth-first order wins.
    ///
    /// The child goes into the parent's left link if that is free, else into
    /// its right link. Instructions naming an unknown value, or a parent with
    /// both links taken, are skipped and reported; the remaining instructions
    /// are still applied.
    pub fn link_all(self, instructions: &[LinkInstruction]) -> (CyclicTree, LinkReport) {
        let _span = debug_span!("link").entered();

        let mut by_value: HashMap<NodeValue, NodeIndex> = HashMap::new();
        self.for_each_layer(|layer| {
            for &index in layer {
                by_value.insert(self.store()[index].value(), index);
            }
        });

        let (mut store, root) = self.into_parts();
        let mut report = LinkReport::default();

        for &instruction in instructions {
            let resolved = by_value
                .get(&instruction.parent)
                .ok_or(StructureError::ValueNotFound(instruction.parent))
                .and_then(|&parent| {
                    by_value
                        .get(&instruction.child)
                        .map(|&child| (parent, child))
                        .ok_or(StructureError::ValueNotFound(instruction.child))
                })
                .and_then(|(parent, child)| attach(&mut store, parent, child, instruction));

            match resolved {
                Ok(()) => {
                    debug!("{} {}", "Linked".bright_purple(), instruction);
                    report.applied += 1;
                }
                Err(err) => {
                    warn!("Skipping link {}: {}", instruction, err);
                    report.errors.push((instruction, err));
                }
            }
        }

        (CyclicTree { store, root }, report)
    }

    /// Return true if some node can be reached from the root along two
    /// different paths. Always false for a tree built by [`crate::TreeBuilder`].
    pub fn has_cycle(&self) -> bool {
        revisits(self.store(), self.root())
    }
}

fn attach(
    store: &mut NodeStore<Node>,
    parent: NodeIndex,
    child: NodeIndex,
    instruction: LinkInstruction,
) -> Result<(), StructureError> {
    let node = &mut store[parent];
    if node.left().is_none() {
        node.set_left(Some(child));
    } else if node.right().is_none() {
        node.set_right(Some(child));
    } else {
        return Err(StructureError::ChildrenFull(instruction.parent));
    }
    Ok(())
}

/// Depth-first walk that reports the first node popped a second time.
fn revisits(store: &NodeStore<Node>, root: Option<NodeIndex>) -> bool {
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut stack: Vec<NodeIndex> = root.into_iter().collect();

    while let Some(index) = stack.pop() {
        if !visited.insert(index) {
            debug!("Node {} reached twice", store[index].value());
            return true;
        }
        stack.extend(store[index].children());
    }

    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Depth-first walk that reports a link to a node still on the active path.
fn back_edge(store: &NodeStore<Node>, root: Option<NodeIndex>) -> bool {
    let mut marks = vec![Mark::Unvisited; store.len()];
    // Each entry records whether the node's children were already pushed
    let mut stack: Vec<(NodeIndex, bool)> = root.map(|root| (root, false)).into_iter().collect();

    while let Some((index, expanded)) = stack.pop() {
        if expanded {
            marks[index] = Mark::Done;
            continue;
        }
        if marks[index] != Mark::Unvisited {
            continue;
        }

        marks[index] = Mark::OnPath;
        stack.push((index, true));

        for child in store[index].children() {
            match marks[child] {
                Mark::OnPath => {
                    debug!(
                        "Node {} links back to ancestor {}",
                        store[index].value(),
                        store[child].value()
                    );
                    return true;
                }
                Mark::Unvisited => stack.push((child, false)),
                Mark::Done => {}
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::test::tree;
    use crate::{TreeBuilder, TreeError};

    #[test]
    fn parse_instruction() {
        assert_eq!(
            "3->2".parse::<LinkInstruction>().unwrap(),
            LinkInstruction::new(3, 2)
        );
        assert_eq!(
            "-1->-7".parse::<LinkInstruction>().unwrap(),
            LinkInstruction::new(-1, -7)
        );
        assert_eq!(LinkInstruction::new(3, 2).to_string(), "3->2");

        assert_eq!(
            "3-2".parse::<LinkInstruction>().unwrap_err(),
            ParseError::MalformedLink("3-2".into())
        );
        assert!(matches!(
            "3->x".parse::<LinkInstruction>().unwrap_err(),
            ParseError::InvalidValue { .. }
        ));

        let format = TokenFormat {
            link_separator: "=>".into(),
            ..TokenFormat::default()
        };
        assert_eq!(
            LinkInstruction::parse_with("4=>5", &format, 0).unwrap(),
            LinkInstruction::new(4, 5)
        );
    }

    #[test]
    fn unmodified_tree_has_no_cycle() {
        let t = tree(&["1", "2", "3", "4", "#", "5", "#"]);
        assert!(!t.has_cycle());
        assert!(!tree(&[]).has_cycle());
    }

    #[test]
    fn back_link_makes_cycle() {
        let t = tree(&["1", "2", "3", "4", "#", "5", "#"]);
        let (graph, report) = t.link(&["3->2"]).unwrap();

        assert_eq!(report.applied, 1);
        assert!(report.is_clean());
        assert!(graph.has_cycle());

        // 2 now hangs off both 1 and 3, but neither is below 2
        assert!(!graph.has_ancestor_cycle());
    }

    #[test]
    fn ancestor_cycle() {
        let t = tree(&["1", "2", "3", "4", "#", "5", "#"]);
        let (graph, report) = t.link(&["3->2", "2->5"]).unwrap();

        assert_eq!(report.applied, 2);
        assert!(graph.has_cycle());

        // 2 -> 5 is not a back link, 5 sits under 3
        assert!(!graph.has_ancestor_cycle());

        let t = tree(&["1", "2", "3", "4"]);
        let (graph, _) = t.link(&["4->1"]).unwrap();
        assert!(graph.has_cycle());
        assert!(graph.has_ancestor_cycle());
    }

    #[test]
    fn self_link() {
        let (graph, report) = tree(&["1"]).link(&["1->1"]).unwrap();
        assert!(report.is_clean());
        assert!(graph.has_cycle());
        assert!(graph.has_ancestor_cycle());
        assert_eq!(graph.len(), 1);
    }

    #[traced_test]
    #[test]
    fn structural_errors_do_not_abort() {
        let t = tree(&["1", "2", "3", "4", "#", "5", "#"]);

        // 1 already has two children, 9 does not exist, 4 -> 1 still applies
        let (graph, report) = t.link(&["1->4", "9->2", "4->9", "4->1"]).unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(
            report.errors,
            vec![
                (LinkInstruction::new(1, 4), StructureError::ChildrenFull(1)),
                (LinkInstruction::new(9, 2), StructureError::ValueNotFound(9)),
                (LinkInstruction::new(4, 9), StructureError::ValueNotFound(9)),
            ]
        );
        assert!(graph.has_ancestor_cycle());
        assert!(logs_contain("node 1 already has two children"));
    }

    #[test]
    fn third_child_rejected() {
        let t = tree(&["1", "2", "3", "4", "#", "5", "#"]);
        let (graph, report) = t.link(&["4->2", "4->3", "4->1"]).unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(
            report.errors,
            vec![(LinkInstruction::new(4, 1), StructureError::ChildrenFull(4))]
        );

        let root = graph.root().unwrap();
        let four = graph
            .store()
            .iter()
            .find(|(_, node)| node.value() == 4)
            .map(|(_, node)| *node)
            .unwrap();
        assert_eq!(graph.node(four.left().unwrap()).unwrap().value(), 2);
        assert_eq!(graph.node(four.right().unwrap()).unwrap().value(), 3);
        assert_eq!(graph.node(root).unwrap().value(), 1);
    }

    #[test]
    fn malformed_instruction_fails_before_linking() {
        let t = tree(&["1", "2", "3"]);
        let err = t.link(&["3->2", "2=>3"]).unwrap_err();
        assert_eq!(err, TreeError::Parse(ParseError::MalformedLink("2=>3".into())));
    }

    #[test]
    fn link_separator_from_builder() {
        let format = TokenFormat {
            link_separator: "=>".into(),
            ..TokenFormat::default()
        };
        let t = TreeBuilder::with_format(format)
            .build(&["1", "2", "3"])
            .unwrap();

        let (graph, report) = t.clone().link(&["3=>2"]).unwrap();
        assert!(report.is_clean());
        assert!(graph.has_cycle());

        let err = t.link(&["3->2"]).unwrap_err();
        assert_eq!(err, TreeError::Parse(ParseError::MalformedLink("3->2".into())));
    }

    #[test]
    fn empty_tree() {
        let (graph, report) = tree(&[]).link(&["1->2"]).unwrap();
        assert!(graph.is_empty());
        assert!(!graph.has_cycle());
        assert_eq!(
            report.errors,
            vec![(LinkInstruction::new(1, 2), StructureError::ValueNotFound(1))]
        );
    }
}
