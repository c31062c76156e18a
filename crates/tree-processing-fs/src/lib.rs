//! Filesystem adapter for `tree-processing`
//!
//! Supplies the child enumerator, filters and actions needed to walk a
//! directory tree, optionally mirroring it into a destination tree.
//!
//! # Example
//!
//! ```no_run
//! use tree_processing::Act;
//! use tree_processing_fs::{not_hidden, tally, tally_files, tally_folders, topdown, Tally};
//!
//! let mut walk = topdown("/some/project", None)?;
//! let mut count = tally().wrap(Act::branch_leaf(
//!     tally_folders().which(not_hidden()),
//!     tally_files().which(not_hidden()),
//! ));
//! walk.process(&mut count)?;
//! println!("{}", count.total().copied().unwrap_or_default());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod actions;
mod error;
mod filters;
mod getter;
mod location;

use std::path::Path;

use tree_processing::{Children, Traversal};

pub use actions::{
    copy_files, count_lines, dry_run_copy_files, hardlink_or_copy_files, propagate_folders,
    recurse_into_folders, relative_path, tally, tally_files, tally_folders, Tally,
};
pub use error::FsError;
pub use filters::{not_hidden, src_is_dir, src_is_regular_file};
pub use getter::{children, children_or_empty, make_node, raw_get};
pub use location::{make_root, FsNode, Location};

/// A depth-first walk of `src`, visiting siblings by name
///
/// With a `dst`, every node also carries its mirrored destination path.
pub fn topdown(
    src: impl AsRef<Path>,
    dst: Option<&Path>,
) -> anyhow::Result<Traversal<FsNode, impl Children<FsNode>>> {
    let root = make_root(src, dst)?;
    Ok(Traversal::new(root, children()).sort_by_key(|node: &FsNode| node.name().clone()))
}
