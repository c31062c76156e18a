//! Where a filesystem node lives

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use derive_more::Display;
use path_clean::PathClean;
use tree_processing::{Node, NodeKind};

/// The handle carried in a node's `current` and `parent` slots
///
/// A plain walk only needs the source path. A mirroring walk moves through a
/// destination tree in lockstep, so each node also knows where its
/// counterpart goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Location {
    #[display(fmt = "{}", "_0.display()")]
    Path(PathBuf),
    #[display(fmt = "{} -> {}", "src.display()", "dst.display()")]
    Mirror { src: PathBuf, dst: PathBuf },
}

impl Location {
    pub fn source(&self) -> &Path {
        match self {
            Location::Path(path) => path,
            Location::Mirror { src, .. } => src,
        }
    }

    pub fn destination(&self) -> Option<&Path> {
        match self {
            Location::Path(_) => None,
            Location::Mirror { dst, .. } => Some(dst),
        }
    }

    /// The location of the child called `name`, on both sides of a mirror
    pub fn child(&self, name: impl AsRef<Path>) -> Self {
        let name = name.as_ref();
        match self {
            Location::Path(path) => Location::Path(path.join(name)),
            Location::Mirror { src, dst } => Location::Mirror {
                src: src.join(name),
                dst: dst.join(name),
            },
        }
    }
}

/// A node of a filesystem walk, keyed by its file name
pub type FsNode = Node<String, Location>;

/// Build the root node for a walk of `src`, optionally mirrored into `dst`
///
/// Both paths are normalized. The root is a branch when `src` is a directory
/// (following symlinks, unlike the children below it).
///
/// # Errors
///
/// Returns an error if `src` cannot be inspected.
pub fn make_root(src: impl AsRef<Path>, dst: Option<&Path>) -> Result<FsNode> {
    let src = src.as_ref().clean();
    let metadata = fs::metadata(&src)
        .with_context(|| format!("Failed to read metadata of walk root {}", src.display()))?;

    let name = root_name(&src)?;

    let current = match dst {
        Some(dst) => Location::Mirror {
            src,
            dst: dst.clean(),
        },
        None => Location::Path(src),
    };

    Ok(Node::root(NodeKind::from_internal(metadata.is_dir()), name, current))
}

/// The file name of `src` once made absolute, so `.` and `..` get a real name
///
/// Only a filesystem root has no file name; it is named by its display form.
fn root_name(src: &Path) -> Result<String> {
    let absolute = if src.is_absolute() {
        src.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to resolve the current directory")?
            .join(src)
            .clean()
    };

    Ok(absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_moves_in_lockstep() {
        let mirror = Location::Mirror {
            src: PathBuf::from("/src"),
            dst: PathBuf::from("/dst"),
        };
        let child = mirror.child("a.txt");

        assert_eq!(child.source(), Path::new("/src/a.txt"));
        assert_eq!(child.destination(), Some(Path::new("/dst/a.txt")));
        assert_eq!(child.to_string(), "/src/a.txt -> /dst/a.txt");
    }

    #[test]
    fn test_plain_location_has_no_destination() {
        let path = Location::Path(PathBuf::from("/src")).child("b");
        assert_eq!(path.source(), Path::new("/src/b"));
        assert_eq!(path.destination(), None);
    }

    #[test]
    fn test_make_root_normalizes() {
        let temp = tempfile::tempdir().unwrap();
        let messy = temp.path().join("sub/..");
        fs::create_dir(temp.path().join("sub")).unwrap();

        let root = make_root(&messy, Some(Path::new("/out/./x/../y"))).unwrap();
        assert!(root.internal());
        assert!(root.is_root());
        assert_eq!(root.current().source(), temp.path());
        assert_eq!(root.current().destination(), Some(Path::new("/out/y")));
    }

    #[test]
    fn test_root_name_of_relative_paths() {
        let cwd = std::env::current_dir().unwrap();
        let name = |p: &str| root_name(Path::new(p)).unwrap();

        let expected = cwd.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name("."), expected);
        assert_eq!(name("./"), expected);
        assert_eq!(name("sub/.."), expected);
        assert_eq!(name("/"), "/");
        assert_eq!(name("/srv/data"), "data");
    }

    #[test]
    fn test_make_root_missing_source() {
        let err = make_root("/definitely/not/here", None).unwrap_err();
        assert!(err.to_string().contains("walk root"));
    }
}
