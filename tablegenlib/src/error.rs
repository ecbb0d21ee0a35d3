//! Error types for tablegenlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a table.
///
/// Every variant is fatal for a run: generation stops at the first one.
#[derive(Error, Debug)]
pub enum TablegenError {
    /// Directory missing or unreadable
    #[error("failed to read directory '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Filename does not follow `<module>.<section>.<resource>.<slug>.<attribution>.<ext>`
    #[error("malformed filename '{filename}': {reason}")]
    Parse { filename: String, reason: String },

    /// Extension other than docx, pptx or ipynb
    #[error("unsupported file type '{extension}': {filename}")]
    UnsupportedFileType { filename: String, extension: String },

    /// Attribution segment is not a number
    #[error("attribution must be a number, got '{token}': {filename}")]
    InvalidAttribution { filename: String, token: String },

    /// Neither a positional directory nor `--directory` was supplied
    #[error("no directory given")]
    MissingDirectory,

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
}
