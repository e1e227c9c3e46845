//! Error types for the protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Transport-level protocol errors.
///
/// These are fatal to the connection that produced them: the server logs
/// the failure and closes the stream. Application-level errors (unknown
/// command, nick collision) are ordinary `ERR:` replies and never appear
/// here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line contained invalid UTF-8.
    #[error("invalid UTF-8 in line: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Line exceeded the maximum allowed length.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Buffered length when the limit was hit.
        actual: usize,
        /// Configured maximum line length.
        limit: usize,
    },
}
