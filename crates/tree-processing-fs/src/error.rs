use std::path::PathBuf;

use derive_more::Display;

/// Validation failures raised by the filesystem actions
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FsError {
    /// The source is a directory, symlink, socket or other non-regular entry
    #[display(fmt = "not a regular file: {}", "_0.display()")]
    NotRegularFile(PathBuf),
    /// A mirroring action met a node without a destination
    #[display(fmt = "no destination for {}", "_0.display()")]
    NotMirrored(PathBuf),
}

impl std::error::Error for FsError {}
