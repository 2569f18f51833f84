//! etree - list directory contents as an indented tree

pub mod cli;
pub mod driver;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cli::{Invocation, parse_args};
pub use driver::{RunReport, run};
pub use error::{Error, Result};
pub use output::{JsonFormatter, OutputConfig, OutputFormat, StreamingFormatter};
pub use tree::{Grouping, Options, SortKey, Totals, TreeOutput, TreeWalker};
