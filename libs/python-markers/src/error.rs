//! Error types for marker parsing and evaluation

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Marker errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid marker syntax at byte {pos}: {message}")]
    Syntax { pos: usize, message: &'static str },

    #[error("Unsupported marker operator: '{0}'")]
    UnknownOperator(String),

    #[error("Version error: {0}")]
    Version(#[from] pyreq_version::Error),

    #[error("Line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}
