//! Error taxonomy for store, session, and rebuild operations

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can go wrong while editing or rebuilding the site
#[derive(Debug, Error)]
pub enum EditorError {
    /// A content file or expected directory is missing
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A content file exists but is not valid JSON
    #[error("malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// An operation referenced a section position that does not exist
    #[error("section index {index} out of range (page has {len} sections)")]
    Index { index: usize, len: usize },

    /// Reading or writing a file failed
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external build command exited non-zero
    #[error("build command failed ({status}): {stderr}")]
    Subprocess { status: ExitStatus, stderr: String },
}

pub type Result<T> = std::result::Result<T, EditorError>;
