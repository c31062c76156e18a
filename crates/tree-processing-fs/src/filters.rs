//! Predicates for narrowing filesystem actions

use std::fs;

use tree_processing::{chainable, FilterChain};

use crate::FsNode;

/// Skip entries whose names start with a dot
pub fn not_hidden() -> FilterChain<FsNode> {
    chainable(|node: &FsNode| !node.name().starts_with('.'))
}

/// Accept only regular files; symlinks are not followed
pub fn src_is_regular_file() -> FilterChain<FsNode> {
    chainable(|node: &FsNode| {
        fs::symlink_metadata(node.current().source())
            .map(|metadata| metadata.file_type().is_file())
            .unwrap_or(false)
    })
}

pub fn src_is_dir() -> FilterChain<FsNode> {
    chainable(|node: &FsNode| {
        fs::symlink_metadata(node.current().source())
            .map(|metadata| metadata.file_type().is_dir())
            .unwrap_or(false)
    })
}
