#![allow(dead_code)]

use proptest::prelude::*;
use proptest::sample::Index;
use tree_processing::{Node, NodeKind};

pub type TestNode = Node<String, usize>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An in-memory tree, addressed by index
///
/// Node 0 is the root. `current` of every produced node is its index and
/// `parent` the index of its parent.
#[derive(Debug, Clone)]
pub struct Arena {
    pub names: Vec<String>,
    pub kinds: Vec<NodeKind>,
    pub parents: Vec<Option<usize>>,
    pub children: Vec<Vec<usize>>,
    pub weights: Vec<u32>,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            names: vec!["root".to_string()],
            kinds: vec![NodeKind::Branch],
            parents: vec![None],
            children: vec![vec![]],
            weights: vec![0],
        }
    }

    pub fn add(&mut self, parent: usize, kind: NodeKind, name: &str, weight: u32) -> usize {
        let id = self.names.len();
        self.names.push(name.to_string());
        self.kinds.push(kind);
        self.parents.push(Some(parent));
        self.children.push(vec![]);
        self.weights.push(weight);
        self.children[parent].push(id);
        id
    }

    pub fn branch(&mut self, parent: usize, name: &str) -> usize {
        self.add(parent, NodeKind::Branch, name, 0)
    }

    pub fn leaf(&mut self, parent: usize, name: &str, weight: u32) -> usize {
        self.add(parent, NodeKind::Leaf, name, weight)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn node(&self, id: usize) -> TestNode {
        Node::new(self.kinds[id], self.names[id].clone(), id, self.parents[id])
    }

    pub fn root(&self) -> TestNode {
        self.node(0)
    }

    pub fn children_of(&self, node: &TestNode) -> anyhow::Result<Vec<TestNode>> {
        Ok(self.children[*node.current()]
            .iter()
            .map(|&id| self.node(id))
            .collect())
    }

    pub fn ancestors(&self, id: usize) -> Vec<usize> {
        let mut ancestors = Vec::new();
        let mut current = self.parents[id];
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parents[parent];
        }
        ancestors
    }

    pub fn branches(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&id| self.kinds[id] == NodeKind::Branch)
            .collect()
    }
}

/// Random trees of up to 40 nodes below the root
pub fn arena_strategy() -> impl Strategy<Value = Arena> {
    prop::collection::vec((any::<Index>(), any::<bool>(), "[a-e]{1,2}", 0u32..100), 0..40)
        .prop_map(|entries| {
            let mut arena = Arena::new();
            for (parent, is_branch, name, weight) in entries {
                let branches = arena.branches();
                let parent = branches[parent.index(branches.len())];
                if is_branch {
                    arena.branch(parent, &name);
                } else {
                    arena.leaf(parent, &name, weight);
                }
            }
            arena
        })
}

/// root
///   .hidden
///   b/
///     y
///   a
///   c/
///     x
///     .d/
///       z
pub fn sample_arena() -> Arena {
    let mut arena = Arena::new();
    arena.leaf(0, ".hidden", 100);
    let b = arena.branch(0, "b");
    arena.leaf(b, "y", 2);
    arena.leaf(0, "a", 1);
    let c = arena.branch(0, "c");
    arena.leaf(c, "x", 3);
    let d = arena.branch(c, ".d");
    arena.leaf(d, "z", 4);
    arena
}
