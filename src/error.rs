//! Error types shared by the CLI, the walker and the output sinks

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown flag, missing or malformed `-L` argument and friends.
    #[error(transparent)]
    ArgumentParse(#[from] clap::Error),

    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A directory could not be opened for listing.
    #[error("cannot open '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Traversal {
            path: path.into(),
            source,
        }
    }

    /// True for errors that are reported before any traversal begins.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::ArgumentParse(_) | Error::InvalidPattern { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
