//! Tree formatting and display
//!
//! This module provides the `TreeOutput` sinks:
//! - Console output with colors, streamed line by line
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (connectors, size and date annotations)
//! - `streaming` - Streaming formatter for console output
//! - `json` - JSON output

mod config;
mod json;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::{OutputConfig, OutputFormat};
pub use json::{JsonFormatter, JsonNode};
pub use streaming::StreamingFormatter;
pub use utils::{connector, date_text, format_time, size_text};
