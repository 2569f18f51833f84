//! Configuration types for the tree walker

use std::path::PathBuf;

use glob::Pattern;

/// Key used to sort the entries of one directory level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep file-system enumeration order
    #[default]
    None,
    Name,
    /// Last modification time, oldest first
    Time,
}

/// Clustering of directories and files, applied after sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    #[default]
    None,
    DirectoriesFirst,
    FilesFirst,
}

/// Resolved traversal and rendering options.
#[derive(Debug, Clone)]
pub struct Options {
    pub display_all_files: bool,
    pub display_file_size: bool,
    pub display_full_path: bool,
    pub display_modified: bool,
    pub only_display_directories: bool,
    pub reverse_order: bool,
    pub sort_key: SortKey,
    pub grouping: Grouping,
    /// Deepest level to list; the root's children are level 1. None = unbounded.
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<Pattern>,
    /// Never empty; see `with_roots`.
    pub root_paths: Vec<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display_all_files: false,
            display_file_size: false,
            display_full_path: false,
            display_modified: false,
            only_display_directories: false,
            reverse_order: false,
            sort_key: SortKey::None,
            grouping: Grouping::None,
            max_depth: None,
            ignore_patterns: Vec::new(),
            root_paths: vec![PathBuf::from(".")],
        }
    }
}

impl Options {
    /// Replace the root paths, dropping duplicates (first occurrence wins).
    /// Falls back to the current directory when `roots` is empty.
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut unique: Vec<PathBuf> = Vec::new();
        for root in roots {
            let root = root.into();
            if !unique.contains(&root) {
                unique.push(root);
            }
        }
        if unique.is_empty() {
            unique.push(PathBuf::from("."));
        }
        self.root_paths = unique;
        self
    }

    /// Check whether a level at `depth` may not be descended any further.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    /// Check a file name against the `-I` patterns.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_patterns.iter().any(|p| p.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_is_current_dir() {
        let options = Options::default();
        assert_eq!(options.root_paths, vec![PathBuf::from(".")]);

        let options = Options::default().with_roots(Vec::<PathBuf>::new());
        assert_eq!(options.root_paths, vec![PathBuf::from(".")]);
    }

    #[test]
    fn test_roots_deduplicated_in_order() {
        let options = Options::default().with_roots(["b", "a", "b", "c", "a"]);
        assert_eq!(
            options.root_paths,
            vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_at_max_depth() {
        let mut options = Options::default();
        assert!(!options.at_max_depth(1));
        assert!(!options.at_max_depth(10_000));

        options.max_depth = Some(2);
        assert!(!options.at_max_depth(1));
        assert!(options.at_max_depth(2));
        assert!(options.at_max_depth(3));
    }

    #[test]
    fn test_is_ignored() {
        let options = Options {
            ignore_patterns: vec![
                Pattern::new("*.log").unwrap(),
                Pattern::new("target").unwrap(),
            ],
            ..Default::default()
        };
        assert!(options.is_ignored("debug.log"));
        assert!(options.is_ignored("target"));
        assert!(!options.is_ignored("main.rs"));
        assert!(!options.is_ignored("targets"));
    }
}
