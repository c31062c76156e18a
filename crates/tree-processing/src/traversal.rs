//! The top-down traversal engine
//!
//! [`TopDown`] is a resumable walk: every call to [`TopDown::advance`] hands
//! the engine the driver's verdict about the node it produced last, and
//! produces the next node. The engine never decides on its own whether to
//! descend into a branch.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use derive_more::Display;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Children, TreeNode, Verdict};

/// The frontier policy of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Order {
    /// Branches are visited from a stack: a subtree is finished before its
    /// next sibling starts
    #[default]
    #[display(fmt = "depth-first")]
    DepthFirst,
    /// Branches are visited from a queue, level by level
    #[display(fmt = "breadth-first")]
    BreadthFirst,
}

/// Orders siblings before they are produced
///
/// Leaves and branches are both sorted ascending under the key, regardless
/// of [`Order`]. Siblings comparing equal keep their enumeration order.
pub struct SortKey<N> {
    compare: Rc<dyn Fn(&N, &N) -> Ordering>,
}

impl<N> SortKey<N> {
    /// Sort by the key `f` extracts from each node
    pub fn by_key<K, F>(f: F) -> Self
    where
        K: Ord,
        F: Fn(&N) -> K + 'static,
    {
        Self::by(move |a: &N, b: &N| f(a).cmp(&f(b)))
    }

    /// Sort with a comparator
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&N, &N) -> Ordering + 'static,
    {
        Self {
            compare: Rc::new(compare),
        }
    }

    fn sort(&self, nodes: &mut [N]) {
        nodes.sort_by(|a, b| (self.compare)(a, b));
    }
}

impl<N> Clone for SortKey<N> {
    fn clone(&self) -> Self {
        Self {
            compare: self.compare.clone(),
        }
    }
}

impl<N> fmt::Debug for SortKey<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortKey")
    }
}

/// Where the node currently lent to the driver came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lent {
    /// Taken off the frontier; its verdict decides whether it is expanded
    Frontier,
    /// Emitted as a leaf child; its verdict is ignored
    Leaf,
}

/// A driver-controlled top-down walk
///
/// The walk starts with the root alone on the frontier. Each node taken off
/// the frontier is lent to the driver; if the verdict that comes back is
/// [`Verdict::Descend`] and the node is internal, its children are
/// enumerated. Leaf children are then produced one after another, and branch
/// children are added to the frontier (pushed in reverse for depth-first so
/// the first one is visited first, enqueued in order for breadth-first).
///
/// # Example
///
/// ```
/// use tree_processing::{Node, NodeKind, Order, TopDown, Verdict};
///
/// type N = Node<&'static str, u32>;
///
/// let children = |node: &N| -> anyhow::Result<Vec<N>> {
///     Ok(match *node.current() {
///         0 => vec![Node::branch("dir", 1, 0), Node::leaf("a", 2, 0)],
///         1 => vec![Node::leaf("b", 3, 1)],
///         _ => vec![],
///     })
/// };
///
/// let root = Node::root(NodeKind::Branch, "root", 0);
/// let mut walk = TopDown::new(Order::DepthFirst, root, children, None);
///
/// let mut names = Vec::new();
/// while let Some(node) = walk.advance(Verdict::Descend)? {
///     names.push(*node.name());
/// }
/// assert_eq!(names, ["root", "a", "dir", "b"]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct TopDown<N, G> {
    order: Order,
    frontier: VecDeque<N>,
    leaves: VecDeque<N>,
    current: Option<(N, Lent)>,
    children: G,
    sort_key: Option<SortKey<N>>,
}

impl<N, G> TopDown<N, G>
where
    N: TreeNode,
    G: Children<N>,
{
    pub fn new(order: Order, root: N, children: G, sort_key: Option<SortKey<N>>) -> Self {
        Self {
            order,
            frontier: VecDeque::from([root]),
            leaves: VecDeque::new(),
            current: None,
            children,
            sort_key,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Resume the walk with the verdict for the node produced last
    ///
    /// Returns the next node, or `None` once the frontier is exhausted. The
    /// verdict passed to the very first call is ignored, since nothing has
    /// been produced yet. Enumeration errors surface from the call that
    /// triggered the enumeration.
    pub fn advance(&mut self, verdict: Verdict) -> anyhow::Result<Option<&N>> {
        if let Some((node, lent)) = self.current.take() {
            match (lent, verdict) {
                (Lent::Frontier, Verdict::Descend) if node.internal() => self.expand(&node)?,
                (Lent::Frontier, Verdict::Prune) => trace!("Pruned subtree"),
                _ => {}
            }
        }

        let next = match self.leaves.pop_front() {
            Some(leaf) => Some((leaf, Lent::Leaf)),
            None => self.take_frontier().map(|node| (node, Lent::Frontier)),
        };
        self.current = next;
        Ok(self.current.as_ref().map(|(node, _)| node))
    }

    /// Returns true once every node has been produced
    pub fn is_finished(&self) -> bool {
        self.current.is_none() && self.leaves.is_empty() && self.frontier.is_empty()
    }

    fn take_frontier(&mut self) -> Option<N> {
        match self.order {
            Order::DepthFirst => self.frontier.pop_back(),
            Order::BreadthFirst => self.frontier.pop_front(),
        }
    }

    fn expand(&mut self, node: &N) -> anyhow::Result<()> {
        let (mut leaves, mut branches): (Vec<N>, Vec<N>) = self
            .children
            .children(node)?
            .into_iter()
            .partition(|child| !child.internal());

        if let Some(key) = &self.sort_key {
            key.sort(&mut leaves);
            key.sort(&mut branches);
        }

        debug!(
            "Expanded branch: {} leaves, {} branches ({})",
            leaves.len(),
            branches.len(),
            self.order
        );

        self.leaves.extend(leaves);
        match self.order {
            Order::DepthFirst => self.frontier.extend(branches.into_iter().rev()),
            Order::BreadthFirst => self.frontier.extend(branches),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, NodeKind};
    use anyhow::bail;

    type TestNode = Node<&'static str, u32>;

    // root
    //   b/      (1)
    //     y     (4)
    //   a       (2)
    //   c/      (3)
    //     x     (5)
    fn test_children(node: &TestNode) -> anyhow::Result<Vec<TestNode>> {
        let id = *node.current();
        Ok(match id {
            0 => vec![
                Node::branch("b", 1, id),
                Node::leaf("a", 2, id),
                Node::branch("c", 3, id),
            ],
            1 => vec![Node::leaf("y", 4, id)],
            3 => vec![Node::leaf("x", 5, id)],
            _ => vec![],
        })
    }

    fn root() -> TestNode {
        Node::root(NodeKind::Branch, "root", 0)
    }

    fn walk_names<G: Children<TestNode>>(
        mut walk: TopDown<TestNode, G>,
        mut verdict: impl FnMut(&TestNode) -> Verdict,
    ) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut next = Verdict::Descend;
        while let Some(node) = walk.advance(next).unwrap() {
            names.push(*node.name());
            next = verdict(node);
        }
        assert!(walk.is_finished());
        names
    }

    #[test]
    fn test_depth_first() {
        let walk = TopDown::new(Order::DepthFirst, root(), test_children, None);
        let names = walk_names(walk, |_| Verdict::Descend);
        assert_eq!(names, vec!["root", "a", "b", "y", "c", "x"]);
    }

    #[test]
    fn test_breadth_first() {
        let mut children = |node: &TestNode| -> anyhow::Result<Vec<TestNode>> {
            let id = *node.current();
            Ok(match id {
                0 => vec![Node::branch("p", 1, id), Node::branch("q", 2, id)],
                1 => vec![Node::branch("p1", 3, id)],
                2 => vec![Node::leaf("q1", 4, id)],
                _ => vec![],
            })
        };
        let walk = TopDown::new(Order::BreadthFirst, root(), &mut children, None);
        let names = walk_names(walk, |_| Verdict::Descend);
        assert_eq!(names, vec!["root", "p", "q", "q1", "p1"]);
    }

    #[test]
    fn test_sorted_siblings() {
        let key = SortKey::by_key(|n: &TestNode| *n.name());
        let walk = TopDown::new(Order::DepthFirst, root(), test_children, Some(key.clone()));
        assert_eq!(
            walk_names(walk, |_| Verdict::Descend),
            vec!["root", "a", "b", "y", "c", "x"]
        );

        let reversed = SortKey::by(|a: &TestNode, b: &TestNode| b.name().cmp(a.name()));
        let walk = TopDown::new(Order::DepthFirst, root(), test_children, Some(reversed.clone()));
        assert_eq!(
            walk_names(walk, |_| Verdict::Descend),
            vec!["root", "a", "c", "x", "b", "y"]
        );

        let walk = TopDown::new(Order::BreadthFirst, root(), test_children, Some(reversed));
        assert_eq!(
            walk_names(walk, |_| Verdict::Descend),
            vec!["root", "a", "c", "x", "b", "y"]
        );
    }

    #[test]
    fn test_prune() {
        let walk = TopDown::new(Order::DepthFirst, root(), test_children, None);
        let names = walk_names(walk, |n| {
            if *n.name() == "b" {
                Verdict::Prune
            } else {
                Verdict::Descend
            }
        });
        assert_eq!(names, vec!["root", "a", "b", "c", "x"]);

        let walk = TopDown::new(Order::DepthFirst, root(), test_children, None);
        assert_eq!(walk_names(walk, |_| Verdict::Prune), vec!["root"]);
    }

    #[test]
    fn test_leaf_verdicts_are_ignored() {
        let walk = TopDown::new(Order::DepthFirst, root(), test_children, None);
        let names = walk_names(walk, |n| {
            if n.internal() {
                Verdict::Descend
            } else {
                Verdict::Prune
            }
        });
        assert_eq!(names, vec!["root", "a", "b", "y", "c", "x"]);
    }

    #[test]
    fn test_lone_leaf_root() {
        let mut calls = 0;
        let mut children = |_: &TestNode| -> anyhow::Result<Vec<TestNode>> {
            calls += 1;
            Ok(vec![])
        };
        let leaf = Node::root(NodeKind::Leaf, "file", 0);
        let walk = TopDown::new(Order::DepthFirst, leaf, &mut children, None);
        assert_eq!(walk_names(walk, |_| Verdict::Descend), vec!["file"]);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_enumeration_error_propagates() {
        let failing = |_: &TestNode| -> anyhow::Result<Vec<TestNode>> { bail!("unreadable") };
        let mut walk = TopDown::new(Order::DepthFirst, root(), failing, None);

        assert_eq!(walk.advance(Verdict::Descend).unwrap().map(|n| *n.name()), Some("root"));
        let err = walk.advance(Verdict::Descend).unwrap_err();
        assert_eq!(err.to_string(), "unreadable");
    }
}
