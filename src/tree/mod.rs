//! Directory tree walking logic
//!
//! This module lists one directory level at a time and streams the result to
//! a `TreeOutput`:
//!
//! - `entry`: collects the children of a directory, applying the hidden,
//!   ignore and directories-only filters
//! - `order`: sort key, reversal and directory/file grouping
//! - `walker`: depth-first recursion, depth limit, per-node annotations
//! - `totals`: directory and file counters for the summary line

mod config;
mod entry;
mod order;
mod totals;
mod utils;
mod walker;

// Re-export public types
pub use config::{Grouping, Options, SortKey};
pub use entry::{Entry, collect_entries};
pub use order::order_entries;
pub use totals::Totals;
pub use utils::{block_size, format_size};
pub use walker::{Lookup, Node, RenderContext, TreeOutput, TreeWalker};
