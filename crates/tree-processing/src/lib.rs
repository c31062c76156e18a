//! Tree Processing Library
//!
//! A pluggable engine for walking trees top-down and applying composable
//! actions to their nodes. The concrete shape of the tree is supplied by a
//! child enumerator, so the same machinery walks a directory tree, an
//! in-memory structure, or anything else that can list a node's children.
//!
//! # Core Concepts
//!
//! - **Node**: an immutable record with an `internal` (branch) flag, a name,
//!   and opaque `current`/`parent` handles
//! - **Children**: maps a node to its ordered children
//! - **FilterChain**: AND-combined predicates that gate an action
//! - **Action**: applied to each node; returning `Outcome::Rejected` skips the
//!   node's contribution and prunes a branch
//! - **Accumulator**: folds action results across a walk
//! - **TopDown**: the resumable engine; `process` and `Traversal` drive it
//!
//! # Example
//!
//! ```
//! use tree_processing::prelude::*;
//!
//! type N = Node<&'static str, u32>;
//!
//! let children = |node: &N| -> anyhow::Result<Vec<N>> {
//!     Ok(match *node.current() {
//!         0 => vec![Node::leaf(".hidden", 1, 0), Node::branch("src", 2, 0)],
//!         2 => vec![Node::leaf("lib.rs", 3, 2)],
//!         _ => vec![],
//!     })
//! };
//!
//! let not_hidden = chainable(|n: &N| !n.name().starts_with('.'));
//! let count_leaves = Act::branch_leaf(
//!     filterable(|_: &N| Ok(0)).which(not_hidden.clone()),
//!     filterable(|_: &N| Ok(1)).which(not_hidden),
//! );
//!
//! let mut walk = Traversal::new(Node::root(NodeKind::Branch, "root", 0), children);
//! let total = walk.process(&mut sum_results(0).wrap(count_leaves))?;
//! assert_eq!(total, Outcome::Kept(1));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod accumulator;
mod action;
mod children;
mod error;
mod filter;
mod node;
mod options;
mod outcome;
mod process;
mod traversal;

pub use accumulator::{sum_results, Accumulated, Accumulator};
pub use action::{filterable, from_fn, Act, Action, BoxedAction, Filterable};
pub use children::{getter, or_else, or_empty, Children};
pub use error::NodeError;
pub use filter::{chainable, require, FilterChain};
pub use node::{Node, NodeKind, TreeNode};
pub use options::WalkOptions;
pub use outcome::{Outcome, Verdict};
pub use process::{process, Nodes, Results, Traversal};
pub use traversal::{Order, SortKey, TopDown};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        chainable, filterable, process, require, sum_results, Accumulator, Act, Action, Children,
        FilterChain, Node, NodeError, NodeKind, Order, Outcome, Traversal, TreeNode,
    };
}
