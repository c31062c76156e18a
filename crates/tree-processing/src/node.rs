//! Core node types for the traversal engine

use derive_more::Display;

/// The minimal structural contract every walked element satisfies
///
/// The engine only needs to know whether a node may have children. Everything
/// else about a node is opaque to the core and belongs to the child
/// enumerator and the actions that consume it.
pub trait TreeNode {
    /// Returns true if this node may have children (a branch)
    fn internal(&self) -> bool;
}

/// The type/kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// A branch node - may have children (e.g., directory)
    #[display(fmt = "branch")]
    Branch,
    /// A leaf node - never recursed into (e.g., file)
    #[display(fmt = "leaf")]
    Leaf,
}

impl NodeKind {
    /// Returns the kind matching an `internal` flag
    pub const fn from_internal(internal: bool) -> Self {
        if internal {
            NodeKind::Branch
        } else {
            NodeKind::Leaf
        }
    }

    /// Returns true if this is a branch node
    pub const fn is_branch(self) -> bool {
        matches!(self, NodeKind::Branch)
    }

    /// Returns true if this is a leaf node
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

/// A single element of a walked tree
///
/// Nodes are immutable value records. Moving through a destination tree is
/// done by constructing a new node for each child, carrying forward whatever
/// `current`/`parent` handles the adapter needs.
///
/// # Type Parameters
///
/// * `K` - the key relating this node to its parent (e.g., a file name)
/// * `H` - a handle to where this node is (e.g., a path, or a source and
///   destination pair for a mirroring walk)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<K, H> {
    kind: NodeKind,
    name: K,
    current: H,
    parent: Option<H>,
}

impl<K, H> Node<K, H> {
    /// Create a new node
    pub fn new(kind: NodeKind, name: K, current: H, parent: Option<H>) -> Self {
        Self {
            kind,
            name,
            current,
            parent,
        }
    }

    /// Create a root node, which has no parent
    pub fn root(kind: NodeKind, name: K, current: H) -> Self {
        Self::new(kind, name, current, None)
    }

    /// Create a new branch node under `parent`
    pub fn branch(name: K, current: H, parent: H) -> Self {
        Self::new(NodeKind::Branch, name, current, Some(parent))
    }

    /// Create a new leaf node under `parent`
    pub fn leaf(name: K, current: H, parent: H) -> Self {
        Self::new(NodeKind::Leaf, name, current, Some(parent))
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns true if this node may have children
    pub fn internal(&self) -> bool {
        self.kind.is_branch()
    }

    pub fn name(&self) -> &K {
        &self.name
    }

    pub fn current(&self) -> &H {
        &self.current
    }

    pub fn parent(&self) -> Option<&H> {
        self.parent.as_ref()
    }

    /// Returns true for the node a walk was started from
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<K, H> TreeNode for Node<K, H> {
    fn internal(&self) -> bool {
        self.kind.is_branch()
    }
}

impl<N: TreeNode + ?Sized> TreeNode for &N {
    fn internal(&self) -> bool {
        (**self).internal()
    }
}
