//! Error types for translator inputs that come from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for translator setup.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors raised while loading translator inputs.
///
/// Record-level problems are not errors here; they are collected as
/// [`MalformedRecord`](splice_types::MalformedRecord)s.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Mapping file could not be opened.
    #[error("cannot read mapping file {}: {source}", path.display())]
    MappingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mapping line starts like an entry but has no `": "` separator.
    #[error("invalid mapping line {line}: {content:?}")]
    InvalidMappingLine { line: usize, content: String },

    /// I/O error while reading mapping lines.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
