//! Resolution of user supplied paths into a flat set of regular files.
//!
//! Files given directly are taken as is, directories are expanded either one
//! level deep or over the whole subtree. The first path that can't be
//! resolved aborts the call and nothing else is returned.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::errors::ResolveError;
use crate::file_set::FileSet;

/// Resolves `paths` into the files they refer to.
///
/// Shorthand for `Resolver::new().recursive(recursive).resolve(paths)`.
pub fn resolve<P: AsRef<Path>>(
    recursive: bool,
    paths: &[P],
) -> Result<Vec<PathBuf>, ResolveError> {
    Resolver::new().recursive(recursive).resolve(paths)
}

/// Options for turning path arguments into files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    recursive: bool,
    follow_links: bool,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into subdirectories instead of taking only direct children
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Follow symlinks met inside directories.
    ///
    /// Links passed directly as arguments are always followed.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Resolves `paths` and returns files in the order they were first seen
    pub fn resolve<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<PathBuf>, ResolveError> {
        Ok(self.resolve_set(paths)?.into_vec())
    }

    /// Same as [`Resolver::resolve`], but keeps the result as a [`FileSet`]
    pub fn resolve_set<P: AsRef<Path>>(&self, paths: &[P]) -> Result<FileSet, ResolveError> {
        if paths.is_empty() {
            return Err(ResolveError::NoInput);
        }

        let mut files = FileSet::new();
        for path in paths {
            self.collect(path.as_ref(), &mut files)?;
        }

        debug!("resolved {} input(s) into {} file(s)", paths.len(), files.len());

        Ok(files)
    }

    fn collect(&self, path: &Path, files: &mut FileSet) -> Result<(), ResolveError> {
        let metadata = fs::metadata(path).map_err(|source| ResolveError::PathAccess {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_file() {
            trace!("input file: {:?}", path);
            files.insert(path.to_path_buf());
            Ok(())
        } else if metadata.is_dir() {
            self.walk(path, files)
        } else {
            Err(ResolveError::Unsupported(path.to_path_buf()))
        }
    }

    fn walk(&self, dir: &Path, files: &mut FileSet) -> Result<(), ResolveError> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        debug!("walking {:?} (max depth {})", dir, max_depth);

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| ResolveError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf()),
                source,
            })?;

            let file_type = entry.file_type();
            if file_type.is_file() {
                let path = entry.into_path();
                trace!("found file: {:?}", path);
                files.insert(path);
            } else if !file_type.is_dir() {
                debug!("skip non-regular entry: {:?}", entry.path());
            }
        }

        Ok(())
    }
}
