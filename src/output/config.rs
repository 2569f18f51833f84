//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print sizes as `4.0K` instead of raw byte counts
    pub human_sizes: bool,
    /// Leave out the summary line (or the JSON report object)
    pub no_report: bool,
}

/// Selected output sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
}
