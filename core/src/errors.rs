use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Resolver was called without any path
    #[error("no input paths given")]
    NoInput,

    /// Input path does not exist or can't be statted
    #[error("can't access {path:?}")]
    PathAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Got I/O error while walking a directory
    #[error("got error while reading directory {path:?}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Input is neither a regular file nor a directory (fifo, socket, device)
    #[error("not a regular file or directory: {0:?}")]
    Unsupported(PathBuf),
}

impl ResolveError {
    #[inline]
    pub fn is_no_input(&self) -> bool {
        matches!(self, ResolveError::NoInput)
    }

    /// Input path that caused the error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolveError::NoInput => None,
            ResolveError::PathAccess { path, .. } | ResolveError::Walk { path, .. } => {
                Some(path.as_path())
            }
            ResolveError::Unsupported(path) => Some(path.as_path()),
        }
    }
}
