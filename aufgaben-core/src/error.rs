//! Error types for the lowering pipeline

use crate::cst::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run.
///
/// No variant is recoverable: the first error stops the pipeline and nothing is
/// written. Variants raised for a task carry its header text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The front end reported syntax errors; the tree is never lowered.
    #[error("{count} syntax error(s) reported by the front end, first at {first}")]
    SyntaxErrors { count: usize, first: Diagnostic },

    /// A point literal is not a plain base-10 integer.
    #[error("task '{header}': malformed point value '{literal}' at line {line}:{column}")]
    MalformedNumber {
        header: String,
        literal: String,
        line: usize,
        column: usize,
    },

    /// A point literal that must be positive is zero or negative.
    #[error("task '{header}': point value {value} at line {line}:{column} must be at least 1")]
    NonPositivePoints {
        header: String,
        value: i32,
        line: usize,
        column: usize,
    },

    /// A composite task kind was lowered without its body.
    #[error("task '{header}': {kind} task is missing its body")]
    MissingPayload { kind: &'static str, header: String },

    /// The task body matched none of the known exercise kinds.
    #[error("task '{header}': unknown task type")]
    UnknownTaskType { header: String },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    /// The destination could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Header of the task the error was raised for, if any.
    pub fn header(&self) -> Option<&str> {
        match self {
            Error::MalformedNumber { header, .. }
            | Error::NonPositivePoints { header, .. }
            | Error::MissingPayload { header, .. }
            | Error::UnknownTaskType { header } => Some(header),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
