use std::path::{Path, PathBuf};

use ahash::AHashSet;

/// Insertion-ordered set of file paths.
///
/// Paths compare component-wise, so `a/b`, `a//b` and `a/./b` collapse into
/// a single entry. The first spelling inserted is the one kept.
#[derive(Debug, Default, Clone)]
pub struct FileSet {
    seen: AHashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` if it isn't present yet, returns `true` when it was new
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }

        self.seen.insert(path.clone());
        self.order.push(path);
        true
    }

    #[inline]
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.order.iter().map(PathBuf::as_path)
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.order
    }
}

impl Extend<PathBuf> for FileSet {
    fn extend<T: IntoIterator<Item = PathBuf>>(&mut self, iter: T) {
        for path in iter {
            self.insert(path);
        }
    }
}

impl FromIterator<PathBuf> for FileSet {
    fn from_iter<T: IntoIterator<Item = PathBuf>>(iter: T) -> Self {
        let mut set = FileSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for FileSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position() {
        let mut set = FileSet::new();
        assert!(set.insert(PathBuf::from("b")));
        assert!(set.insert(PathBuf::from("a")));
        assert!(!set.insert(PathBuf::from("b")));

        assert_eq!(set.len(), 2);
        assert_eq!(set.into_vec(), vec![PathBuf::from("b"), PathBuf::from("a")]);
    }

    #[test]
    fn equivalent_spellings_collapse() {
        let set: FileSet = ["dir/file", "dir//file", "dir/./file"]
            .into_iter()
            .map(PathBuf::from)
            .collect();

        assert_eq!(set.len(), 1);
        assert!(set.contains(Path::new("dir/file")));
        assert_eq!(set.iter().next(), Some(Path::new("dir/file")));
    }

    #[test]
    fn empty_set() {
        let set = FileSet::new();
        assert!(set.is_empty());
        assert_eq!(set.into_iter().count(), 0);
    }
}
