//! Global error handling for ctxdump
//!
//! Fatal errors of a run. Per-file read failures are not errors at this
//! level; they are carried as [`crate::types::ReadFailure`] and written into
//! the output instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for ctxdump operations
#[derive(Error, Debug)]
pub enum CtxDumpError {
    /// File system errors with the path that caused them
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// The root directory could not be traversed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),
}

impl CtxDumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CtxDumpError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Specialized Result type for ctxdump operations
pub type Result<T> = std::result::Result<T, CtxDumpError>;

/// Creates a CtxDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CtxDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets the binary keep an io::Result main
impl From<CtxDumpError> for io::Error {
    fn from(err: CtxDumpError) -> Self {
        match err {
            CtxDumpError::Io { source, .. } => source,
            CtxDumpError::PathNotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(n > 0, Config, "expected a positive value, got {}", n);
        Ok(n)
    }

    #[test]
    fn ensure_returns_formatted_error() {
        assert_eq!(check_positive(3).unwrap(), 3);

        let err = check_positive(-1).unwrap_err();
        assert!(matches!(err, CtxDumpError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: expected a positive value, got -1"
        );
    }

    #[test]
    fn converts_into_io_error() {
        let err: io::Error = crate::error!(PathNotFound, "missing/dir").into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        let err: io::Error = CtxDumpError::io(
            "out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
