//! Runs the walker over every root and reports the totals

use std::path::PathBuf;

use log::warn;

use crate::error::{Error, Result};
use crate::tree::{Options, Totals, TreeOutput, TreeWalker};

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub totals: Totals,
    /// Roots that could not be opened, in the order they were given
    pub failed_roots: Vec<PathBuf>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed_roots.is_empty()
    }
}

/// List every root in `options` into `output`, then emit the summary.
///
/// A root that cannot be opened is reported and skipped; only output
/// failures abort the run.
pub fn run<O: TreeOutput>(options: &Options, output: &mut O) -> Result<RunReport> {
    let walker = TreeWalker::new(options.clone());
    let mut report = RunReport::default();

    for root in &options.root_paths {
        match walker.walk(root, output, &mut report.totals) {
            Ok(()) => {}
            Err(e @ Error::Traversal { .. }) => {
                warn!("{}", e);
                report.failed_roots.push(root.clone());
            }
            Err(e) => return Err(e),
        }
        output.end_root()?;
    }

    output.finish(&report.totals)?;
    Ok(report)
}
