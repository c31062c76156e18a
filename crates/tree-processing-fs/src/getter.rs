//! Listing the children of a directory node

use std::fs::{self, DirEntry};

use anyhow::{Context, Result};
use tree_processing::{getter, or_empty, Children, Node, NodeKind, Outcome};

use crate::FsNode;

/// Read the entries of the directory behind `node`
pub fn raw_get(node: &FsNode) -> Result<Vec<DirEntry>> {
    let path = node.current().source();
    fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list entries of {}", path.display()))
}

/// Turn a directory entry into a child of `parent`
///
/// Symlinks are not followed: a link to a directory is a leaf.
pub fn make_node(parent: &FsNode, entry: DirEntry) -> Result<Outcome<FsNode>> {
    let file_type = entry
        .file_type()
        .with_context(|| format!("Failed to read file type of {}", entry.path().display()))?;
    let file_name = entry.file_name();

    Ok(Outcome::Kept(Node::new(
        NodeKind::from_internal(file_type.is_dir()),
        file_name.to_string_lossy().into_owned(),
        parent.current().child(&file_name),
        Some(parent.current().clone()),
    )))
}

/// The filesystem child enumerator; read failures abort the walk
pub fn children() -> impl Children<FsNode> {
    getter::<FsNode, _, _, _>(raw_get, make_node)
}

/// Like [`children`], but unreadable directories are walked as empty
pub fn children_or_empty() -> impl Children<FsNode> {
    or_empty::<FsNode, _>(children())
}
