/*!
 * Core types and data structures for ctxdump
 */

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// An eligible file discovered by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// Absolute path used for reading
    pub path: PathBuf,
    /// `./`-prefixed path relative to the scan root, written in the header
    pub display_path: String,
}

/// Why an eligible file could not be included as text
#[derive(Error, Debug)]
pub enum ReadFailure {
    /// Open or read failed (permissions, file vanished, ...)
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Content is not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// File exceeds the configured size limit
    #[error("file too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
}

/// Result of reading one eligible file
#[derive(Debug)]
pub enum FileOutcome {
    /// Verbatim text content
    Read(String),
    /// Read failed; the writer emits a placeholder instead
    Failed(ReadFailure),
}
