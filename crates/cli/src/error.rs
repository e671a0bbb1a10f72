use std::path::PathBuf;

/// Trawl error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A supplied regular expression failed to compile.
    #[error("invalid regular expression \"{pattern}\" - {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The filename mask failed to compile.
    #[error("invalid file mask \"{mask}\" - {source}")]
    Mask {
        mask: String,
        #[source]
        source: globset::Error,
    },

    /// File I/O error
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error.
    #[error("{0}")]
    Walk(String),

    /// Failure writing the report.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type using trawl Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes.
///
/// The scan either runs to completion or aborts on the first fatal error;
/// the status distinguishes argument-class failures from scan-time failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Scan ran to completion (with or without matches)
    Success = 0,
    /// Invalid pattern or filename mask
    ArgumentError = 2,
    /// I/O or traversal failure during the scan
    ScanError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Pattern { .. } | Error::Mask { .. } => ExitCode::ArgumentError,
            Error::Io { .. } | Error::Walk(_) | Error::Output(_) => ExitCode::ScanError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
