//! Directory entries and the per-level entry collector

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};

use super::config::Options;
use super::utils::block_size;

/// One child of a directory being listed.
///
/// Size and modification time are not captured up front; they are queried
/// on demand because most listings never ask for them.
#[derive(Debug, Clone)]
pub struct Entry {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
    is_symlink: bool,
    symlink_target: Option<PathBuf>,
}

impl Entry {
    /// Build an entry without touching the file system.
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());
        Self {
            name,
            path,
            is_dir,
            is_symlink: false,
            symlink_target: None,
        }
    }

    /// Mark the entry as a symbolic link pointing at `target`.
    pub fn with_symlink_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.is_symlink = true;
        self.symlink_target = Some(target.into());
        self
    }

    fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        let is_symlink = entry.file_type().is_ok_and(|t| t.is_symlink());

        // Symlinks are classified by what they point at; a dangling link is a file.
        let is_dir = if is_symlink {
            fs::metadata(&path).is_ok_and(|m| m.is_dir())
        } else {
            entry.file_type().is_ok_and(|t| t.is_dir())
        };
        let symlink_target = if is_symlink {
            fs::read_link(&path).ok()
        } else {
            None
        };

        Self {
            name: entry.file_name(),
            path,
            is_dir,
            is_symlink,
            symlink_target,
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    pub fn symlink_target(&self) -> Option<&Path> {
        self.symlink_target.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// Byte length for files, file-system block size for directories.
    pub fn size(&self) -> io::Result<u64> {
        if self.is_dir {
            block_size(&self.path)
        } else {
            Ok(fs::metadata(&self.path)?.len())
        }
    }

    /// Last modification time, following symlinks.
    pub fn modified(&self) -> io::Result<SystemTime> {
        fs::metadata(&self.path)?.modified()
    }
}

/// Collect the immediate children of `dir` in enumeration order, dropping
/// hidden, ignored and (in directories-only mode) non-directory entries.
pub fn collect_entries(dir: &Path, options: &Options) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| Error::traversal(dir, e))?;

    let entries = read_dir
        .filter_map(|e| e.ok())
        .map(|e| Entry::from_dir_entry(&e))
        .filter(|entry| is_listed(entry, options))
        .collect();

    Ok(entries)
}

fn is_listed(entry: &Entry, options: &Options) -> bool {
    if !options.display_all_files && entry.is_hidden() {
        return false;
    }
    if options.only_display_directories && !entry.is_dir() {
        return false;
    }
    !options.is_ignored(&entry.name().to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn names(entries: &[Entry]) -> Vec<String> {
        let mut names: Vec<String> = entries
            .iter()
            .map(|e| e.name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_collects_immediate_children_only() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "a");
        tree.add_file("sub/b.txt", "b");

        let entries = collect_entries(tree.path(), &Options::default()).unwrap();
        assert_eq!(names(&entries), vec!["a.txt", "sub"]);

        let sub = entries.iter().find(|e| e.name() == "sub").unwrap();
        assert!(sub.is_dir());
        assert!(!sub.is_symlink());
    }

    #[test]
    fn test_hidden_entries_filtered_unless_all() {
        let tree = TestTree::new();
        tree.add_file(".env", "SECRET=1");
        tree.add_file("visible", "");

        let entries = collect_entries(tree.path(), &Options::default()).unwrap();
        assert_eq!(names(&entries), vec!["visible"]);

        let options = Options {
            display_all_files: true,
            ..Default::default()
        };
        let entries = collect_entries(tree.path(), &options).unwrap();
        assert_eq!(names(&entries), vec![".env", "visible"]);
    }

    #[test]
    fn test_directories_only() {
        let tree = TestTree::new();
        tree.add_file("file.txt", "");
        tree.add_dir("dir");

        let options = Options {
            only_display_directories: true,
            ..Default::default()
        };
        let entries = collect_entries(tree.path(), &options).unwrap();
        assert_eq!(names(&entries), vec!["dir"]);
    }

    #[test]
    fn test_ignore_patterns() {
        let tree = TestTree::new();
        tree.add_file("keep.rs", "");
        tree.add_file("drop.log", "");

        let options = Options {
            ignore_patterns: vec![glob::Pattern::new("*.log").unwrap()],
            ..Default::default()
        };
        let entries = collect_entries(tree.path(), &options).unwrap();
        assert_eq!(names(&entries), vec!["keep.rs"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_classified_by_target() {
        let tree = TestTree::new();
        tree.add_file("real/file.txt", "");
        tree.add_symlink("real", "dirlink");
        tree.add_symlink("missing", "dangling");

        let entries = collect_entries(tree.path(), &Options::default()).unwrap();
        let dirlink = entries.iter().find(|e| e.name() == "dirlink").unwrap();
        assert!(dirlink.is_dir());
        assert!(dirlink.is_symlink());
        assert_eq!(dirlink.symlink_target(), Some(Path::new("real")));

        let dangling = entries.iter().find(|e| e.name() == "dangling").unwrap();
        assert!(!dangling.is_dir());
        assert!(dangling.is_symlink());
        assert!(dangling.size().is_err());
    }

    #[test]
    fn test_missing_directory_is_traversal_error() {
        let tree = TestTree::new();
        let missing = tree.path().join("gone");
        let err = collect_entries(&missing, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::Traversal { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let tree = TestTree::new();
        let file = tree.add_file("plain.txt", "");
        assert!(collect_entries(&file, &Options::default()).is_err());
    }

    #[test]
    fn test_file_size() {
        let tree = TestTree::new();
        tree.add_file("five.txt", "12345");
        let entries = collect_entries(tree.path(), &Options::default()).unwrap();
        assert_eq!(entries[0].size().unwrap(), 5);
    }

    #[test]
    fn test_is_hidden() {
        assert!(Entry::new("x/.git", true).is_hidden());
        assert!(!Entry::new("x/git", true).is_hidden());
        assert!(!Entry::new("x/a.b", false).is_hidden());
    }
}
