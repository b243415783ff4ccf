use std::io;
use thiserror::Error;

/// Result type for framezip operations
pub type Result<T> = std::result::Result<T, ZipError>;

/// Unified error type for archive building
///
/// Every failure aborts the whole build; no partial or corrupt archive
/// is ever handed back to the caller.
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("failed to read content for entry '{name}': {source}")]
    ContentRead {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("too many entries: {0} (the trailer holds at most 65535)")]
    EntryCountOverflow(usize),

    #[error("size overflow: {0}")]
    SizeOverflow(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
