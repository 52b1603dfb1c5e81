use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Result, TreeError};

use super::entry::Entry;

/// Source of directory listings for the renderer.
pub trait DirectoryLister {
    /// Return the immediate children of `path`, in no particular order.
    fn list(&self, path: &Path) -> Result<Vec<Entry>>;
}

/// Lists directories on the local filesystem.
///
/// Symbolic links are not followed: a link to a directory is reported as a
/// non-directory whose size is the size of the link itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FsLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>> {
        let metadata = fs::metadata(path).map_err(|e| TreeError::from_io(path, e))?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(path.to_path_buf()));
        }

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        // Collected eagerly; the directory handle is closed when the iterator drops.
        let mut entries = Vec::new();
        for result in walker {
            let dent = result.map_err(|e| walk_error(path, e))?;
            let name = dent.file_name().to_os_string();

            let entry = if dent.file_type().is_dir() {
                Entry::dir(name)
            } else {
                let size = dent.metadata().map_err(|e| walk_error(path, e))?.len();
                Entry::file(name, size)
            };
            entries.push(entry);
        }

        tracing::trace!(path = %path.display(), count = entries.len(), "Listed directory");
        Ok(entries)
    }
}

fn walk_error(dir: &Path, err: walkdir::Error) -> TreeError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    match err.into_io_error() {
        Some(source) => TreeError::from_io(&path, source),
        None => TreeError::Io {
            path,
            source: io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        },
    }
}
