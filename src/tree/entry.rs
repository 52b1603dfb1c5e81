use std::ffi::OsString;

/// One immediate child of a listed directory.
///
/// Entries are produced fresh by every listing and dropped once their line
/// (and subtree) has been rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw entry name (last component of path), unique among siblings
    pub name: OsString,

    /// True if this is a directory
    pub is_dir: bool,

    /// Size in bytes; only meaningful for non-directories
    pub size: u64,
}

impl Entry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size: 0,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size,
        }
    }
}
