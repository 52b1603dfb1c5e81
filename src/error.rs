use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to write output: {0}")]
    SinkWrite(#[source] io::Error),
}

impl TreeError {
    /// Classify an I/O failure that happened while opening, stating or listing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => TreeError::PathNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotADirectory => TreeError::NotADirectory(path.to_path_buf()),
            _ => TreeError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TreeError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert!(err.to_string().contains("/etc/hosts"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::ReadError {
            path: PathBuf::from("missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let tree_err: TreeError = config_err.into();
        assert!(matches!(tree_err, TreeError::Config(_)));
    }

    #[test]
    fn classifies_io_errors_by_kind() {
        let path = Path::new("/r");

        let err = TreeError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, TreeError::PathNotFound(p) if p == path));

        let err = TreeError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, TreeError::PermissionDenied(_)));

        let err = TreeError::from_io(path, io::Error::new(io::ErrorKind::Other, "disk on fire"));
        match err {
            TreeError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert!(source.to_string().contains("disk on fire"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
