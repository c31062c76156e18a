//! Ready-made actions for walking, mirroring and measuring file trees
//!
//! Every action here is [`filterable`], so it can be narrowed further with
//! [`Filterable::which`] before being handed to a walk.

use std::fs;
use std::ops::Add;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use derive_more::Display;
use log::{debug, info};
use tree_processing::{filterable, sum_results, Accumulator, Filterable};

use crate::{FsError, FsNode};

/// Do nothing with folders beyond letting the walk descend into them
///
/// Each folder contributes `T::default()`, so this pairs with any file action
/// in an [`Act::branch_leaf`](tree_processing::Act::branch_leaf).
pub fn recurse_into_folders<T: Default>(
) -> Filterable<impl FnMut(&FsNode) -> Result<T> + Clone, FsNode> {
    filterable(|_: &FsNode| -> Result<T> { Ok(T::default()) })
}

/// Create the destination counterpart of each folder
pub fn propagate_folders() -> Filterable<impl FnMut(&FsNode) -> Result<PathBuf> + Clone, FsNode>
{
    filterable(|node: &FsNode| -> Result<PathBuf> {
        let (src, dst) = mirrored(node)?;
        if !src.is_dir() {
            return Err(anyhow::anyhow!("not a directory: {}", src.display()));
        }
        fs::create_dir_all(dst)
            .with_context(|| format!("Failed to create folder {}", dst.display()))?;
        debug!("Created folder {}", dst.display());
        Ok(dst.to_path_buf())
    })
}

/// Copy each regular file to its destination
pub fn copy_files() -> Filterable<impl FnMut(&FsNode) -> Result<PathBuf> + Clone, FsNode> {
    filterable(|node: &FsNode| -> Result<PathBuf> {
        let (src, dst) = mirrored(node)?;
        regular_file(src)?;
        copy(src, dst)?;
        Ok(dst.to_path_buf())
    })
}

/// Hard-link each regular file to its destination, copying when linking fails
pub fn hardlink_or_copy_files(
) -> Filterable<impl FnMut(&FsNode) -> Result<PathBuf> + Clone, FsNode> {
    filterable(|node: &FsNode| -> Result<PathBuf> {
        let (src, dst) = mirrored(node)?;
        regular_file(src)?;
        if let Err(e) = fs::hard_link(src, dst) {
            debug!("Hard link {} failed ({}), copying", dst.display(), e);
            copy(src, dst)?;
        }
        Ok(dst.to_path_buf())
    })
}

/// Log the copies [`copy_files`] would make without touching the destination
pub fn dry_run_copy_files() -> Filterable<impl FnMut(&FsNode) -> Result<PathBuf> + Clone, FsNode>
{
    filterable(|node: &FsNode| -> Result<PathBuf> {
        let (src, dst) = mirrored(node)?;
        regular_file(src)?;
        info!("Would copy {} to {}", src.display(), dst.display());
        Ok(dst.to_path_buf())
    })
}

/// Count the lines of each regular file
///
/// A final line without a trailing newline still counts; an empty file has
/// no lines.
pub fn count_lines() -> Filterable<impl FnMut(&FsNode) -> Result<usize> + Clone, FsNode> {
    filterable(|node: &FsNode| -> Result<usize> {
        let src = node.current().source();
        regular_file(src)?;
        let bytes =
            fs::read(src).with_context(|| format!("Failed to read {}", src.display()))?;
        Ok(line_count(&bytes))
    })
}

fn line_count(bytes: &[u8]) -> usize {
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    match bytes.last() {
        Some(&last) if last != b'\n' => newlines + 1,
        _ => newlines,
    }
}

/// Running count of folders and files seen by a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} folders, {} files", folders, files)]
pub struct Tally {
    pub folders: usize,
    pub files: usize,
}

impl Tally {
    pub const fn new(folders: usize, files: usize) -> Self {
        Self { folders, files }
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally::new(self.folders + other.folders, self.files + other.files)
    }
}

/// One folder per branch; the folder a walk starts from counts as zero
pub fn tally_folders() -> Filterable<impl FnMut(&FsNode) -> Result<Tally> + Clone, FsNode> {
    filterable(|node: &FsNode| -> Result<Tally> {
        Ok(if node.is_root() {
            Tally::default()
        } else {
            Tally::new(1, 0)
        })
    })
}

pub fn tally_files() -> Filterable<impl FnMut(&FsNode) -> Result<Tally> + Clone, FsNode> {
    filterable(|_: &FsNode| -> Result<Tally> { Ok(Tally::new(0, 1)) })
}

/// Sum [`tally_folders`] and [`tally_files`] results, starting from zero
pub fn tally() -> Accumulator<Tally, fn(Tally, Tally) -> Tally> {
    sum_results(Tally::default())
}

/// The path of `node` relative to the source of `root`
pub fn relative_path(root: &FsNode, node: &FsNode) -> Option<PathBuf> {
    pathdiff::diff_paths(node.current().source(), root.current().source())
}

fn mirrored(node: &FsNode) -> Result<(&Path, &Path)> {
    let location = node.current();
    let dst = location
        .destination()
        .ok_or_else(|| FsError::NotMirrored(location.source().to_path_buf()))?;
    Ok((location.source(), dst))
}

fn regular_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?;
    if !metadata.file_type().is_file() {
        return Err(FsError::NotRegularFile(path.to_path_buf()).into());
    }
    Ok(())
}

fn copy(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;
    debug!("Copied {} to {}", src.display(), dst.display());
    Ok(())
}
