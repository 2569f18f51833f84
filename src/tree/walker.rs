//! TreeWalker - walks a root depth-first and streams one node per entry

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, warn};

use crate::error::{Error, Result};

use super::config::Options;
use super::entry::{Entry, collect_entries};
use super::order::order_entries;
use super::totals::Totals;

/// Result of an on-demand metadata query for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Not requested by the options
    Skipped,
    Found(T),
    Failed,
}

impl<T> Lookup<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Everything an output sink needs to draw one entry.
#[derive(Debug, Clone)]
pub struct Node {
    /// Bare file name, or the full path with `-f`
    pub label: String,
    pub is_dir: bool,
    pub symlink_target: Option<PathBuf>,
    pub size: Lookup<u64>,
    pub modified: Lookup<SystemTime>,
    /// Set when the directory could not be opened for descent
    pub error: Option<String>,
}

/// Per-level rendering state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub prefix: String,
    pub depth: usize,
}

impl RenderContext {
    pub fn root() -> Self {
        Self {
            prefix: String::new(),
            depth: 1,
        }
    }

    /// Context for the children of an entry at this level.
    pub fn child(&self, is_last: bool) -> Self {
        let prefix = if is_last {
            format!("{}    ", self.prefix)
        } else {
            format!("{}│   ", self.prefix)
        };
        Self {
            prefix,
            depth: self.depth + 1,
        }
    }
}

/// Sink for streamed tree output.
///
/// Nodes arrive in display order. A node's children follow it directly,
/// one level deeper, before its next sibling.
pub trait TreeOutput {
    /// Start a new root. `error` is set when the root could not be opened.
    fn root(&mut self, path: &Path, error: Option<&str>) -> io::Result<()>;

    fn node(&mut self, node: &Node, ctx: &RenderContext, is_last: bool) -> io::Result<()>;

    /// Called after the last node of a root.
    fn end_root(&mut self) -> io::Result<()>;

    /// Called once, after every root.
    fn finish(&mut self, totals: &Totals) -> io::Result<()>;
}

/// Depth-first tree walker driving a `TreeOutput`.
pub struct TreeWalker {
    options: Options,
}

impl TreeWalker {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render one root into `output`, adding its entries to `totals`.
    ///
    /// Only a root that cannot be opened yields `Error::Traversal`; failures
    /// further down are reported on the affected node and the walk goes on.
    pub fn walk<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
        totals: &mut Totals,
    ) -> Result<()> {
        let entries = match self.read_level(root) {
            Ok(entries) => entries,
            Err(e) => {
                output.root(root, Some(&error_detail(&e)))?;
                return Err(e);
            }
        };

        output.root(root, None)?;
        self.render_level(entries, &RenderContext::root(), output, totals)
    }

    fn read_level(&self, dir: &Path) -> Result<Vec<Entry>> {
        debug!("reading {}", dir.display());
        let entries = collect_entries(dir, &self.options)?;
        Ok(order_entries(entries, &self.options))
    }

    fn render_level<O: TreeOutput>(
        &self,
        entries: Vec<Entry>,
        ctx: &RenderContext,
        output: &mut O,
        totals: &mut Totals,
    ) -> Result<()> {
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;

            // Symlinked directories are listed but never entered; that keeps
            // link cycles from recursing forever.
            let descend = entry.is_dir()
                && !entry.is_symlink()
                && !self.options.at_max_depth(ctx.depth);

            let mut error = None;
            let children = if descend {
                match self.read_level(entry.path()) {
                    Ok(children) => Some(children),
                    Err(e) => {
                        warn!("{}", e);
                        error = Some(error_detail(&e));
                        None
                    }
                }
            } else {
                None
            };

            output.node(&self.describe(entry, error), ctx, is_last)?;

            if entry.is_dir() {
                totals.record_directory();
            } else {
                totals.record_file();
            }

            if let Some(children) = children {
                self.render_level(children, &ctx.child(is_last), output, totals)?;
            }
        }

        Ok(())
    }

    fn describe(&self, entry: &Entry, error: Option<String>) -> Node {
        let label = if self.options.display_full_path {
            entry.path().display().to_string()
        } else {
            entry.name().to_string_lossy().to_string()
        };

        let size = if self.options.display_file_size {
            match entry.size() {
                Ok(bytes) => Lookup::Found(bytes),
                Err(e) => {
                    warn!("cannot read size of '{}': {}", entry.path().display(), e);
                    Lookup::Failed
                }
            }
        } else {
            Lookup::Skipped
        };

        let modified = if self.options.display_modified {
            match entry.modified() {
                Ok(time) => Lookup::Found(time),
                Err(e) => {
                    warn!(
                        "cannot read modification time of '{}': {}",
                        entry.path().display(),
                        e
                    );
                    Lookup::Failed
                }
            }
        } else {
            Lookup::Skipped
        };

        Node {
            label,
            is_dir: entry.is_dir(),
            symlink_target: entry.symlink_target().map(Path::to_path_buf),
            size,
            modified,
            error,
        }
    }
}

/// The underlying cause of a traversal error, without the path.
fn error_detail(error: &Error) -> String {
    match error {
        Error::Traversal { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
