//! Directory and file counters for the summary line

use serde::Serialize;

/// Running totals across every root of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub directories: usize,
    pub files: usize,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }

    /// Total number of listed entries.
    pub fn entries(&self) -> usize {
        self.directories + self.files
    }

    /// `"<D> directories, <F> files."`, singular when a count is exactly one.
    pub fn summary(&self) -> String {
        format!(
            "{} {}, {} {}.",
            self.directories,
            if self.directories == 1 {
                "directory"
            } else {
                "directories"
            },
            self.files,
            if self.files == 1 { "file" } else { "files" },
        )
    }
}
