//! Error types for the style compiler

use thiserror::Error;

/// Result type alias for compiler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the edges of the compiler.
///
/// Compiling a parsed block tree never fails; these only surface while
/// reading input documents.
#[derive(Error, Debug)]
pub enum Error {
    /// Input was not valid JSON
    #[error("Failed to parse block document: {0}")]
    ParseError(String),

    /// JSON was valid but not a list of blocks
    #[error("Invalid block document: {0}")]
    DocumentError(String),

    /// Block configuration defaults had the wrong shape
    #[error("Invalid block configuration: {0}")]
    ConfigError(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}
